use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Чтение символов из текста: строка может содержать один символ или
/// список через запятую, всё после `#` считается комментарием.
/// Порядок первого появления сохраняется: он уходит в `tsyms` как есть.
pub fn read_symbols<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Ordered::default();

    for line in BufReader::new(reader).lines() {
        out.extend(strip_comment(&line?));
    }

    Ok(out.items)
}

/// Чтение символов из файла
pub fn read_symbols_from_path(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    read_symbols(fs::File::open(path)?)
}

/// Парсит список символов из строки вида "eth, USD, ,btc".
/// Правила:
/// - разделитель: запятая
/// - trim пробелов
/// - пустые элементы игнорируются
/// - нормализация: ASCII uppercase
/// - дубликаты выкидываются, порядок первого появления сохраняется
pub fn parse_symbols_csv(raw: &str) -> Vec<String> {
    let mut out = Ordered::default();
    out.extend(raw);
    out.items
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(data, _)| data)
}

#[derive(Default)]
struct Ordered {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl Ordered {
    fn extend(&mut self, csv: &str) {
        let symbols = csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_ascii_uppercase);

        for symbol in symbols {
            if self.seen.insert(symbol.clone()) {
                self.items.push(symbol);
            }
        }
    }
}
