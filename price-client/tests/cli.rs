use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use assert_cmd::Command;
use predicates::prelude::*;

fn price_client() -> Command {
    let mut cmd = Command::cargo_bin("price-client").unwrap();
    cmd.env_remove("CRYPTOCOMPARE_API_KEY");
    cmd
}

/// Одноразовый HTTP-сервер с фиксированным JSON-ответом.
/// Возвращает корень API и request line пришедшего запроса.
fn serve_once(body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let root = format!("http://{}/", listener.local_addr().unwrap());

    let h = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut line = String::new();
            let n = reader.read_line(&mut line).unwrap();
            if n == 0 || line == "\r\n" {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        request_line.trim_end().to_string()
    });

    (root, h)
}

#[test]
fn help_lists_flags() {
    price_client()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--fsym"))
        .stdout(predicate::str::contains("--tsyms-file"));
}

#[test]
fn fsym_is_required() {
    price_client()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fsym"));
}

#[test]
fn blank_fsym_is_rejected() {
    price_client()
        .args(["--fsym", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fsym is empty"));
}

#[test]
fn prints_sorted_prices() {
    let (root, h) = serve_once(r#"{"USD": 50000, "ETH": 16.5}"#);

    price_client()
        .args(["--fsym", "btc", "--tsyms", "usd,eth", "--api-root", &root])
        .assert()
        .success()
        .stdout("ETH\t16.5\nUSD\t50000\n");

    assert_eq!(
        h.join().unwrap(),
        "GET /data/price?fsym=BTC&tsyms=USD,ETH&e=CCCAGG&sign=false&tryConversion=true HTTP/1.1"
    );
}

#[test]
fn prints_json_array() {
    let (root, h) = serve_once(r#"{"EUR": 0.5}"#);

    let out = price_client()
        .args(["--fsym", "USD", "--tsyms", "EUR", "--json", "--api-root", &root])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v, serde_json::json!([{"name": "EUR", "value": 0.5}]));

    h.join().unwrap();
}

#[test]
fn api_error_fails_with_message() {
    let (root, h) = serve_once(r#"{"Response": "Error", "Message": "rate limit exceeded"}"#);

    price_client()
        .args(["--fsym", "BTC", "--tsyms", "USD", "--api-root", &root])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("rate limit exceeded"));

    h.join().unwrap();
}

#[test]
fn non_numeric_value_fails_with_key() {
    let (root, h) = serve_once(r#"{"BTC": "not-a-number"}"#);

    price_client()
        .args(["--fsym", "USD", "--tsyms", "BTC", "--api-root", &root])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"BTC\""));

    h.join().unwrap();
}
