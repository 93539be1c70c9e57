use std::io::{self, Write};

use price_core::Price;

/// `SYMBOL<TAB>VALUE`, по строке на цену
pub(crate) fn write_plain<W: Write>(mut out: W, prices: &[Price]) -> io::Result<()> {
    for p in prices {
        writeln!(out, "{}\t{}", p.name, p.value)?;
    }
    out.flush()
}

/// JSON-массив `[{"name": ..., "value": ...}]`
pub(crate) fn write_json<W: Write>(mut out: W, prices: &[Price]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, prices)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_one_line_per_price() {
        let mut buf = Vec::new();
        write_plain(&mut buf, &[Price::new("ETH", 16.5), Price::new("USD", 50000.0)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ETH\t16.5\nUSD\t50000\n");
    }

    #[test]
    fn json_round_trips_through_serde() {
        let prices = vec![Price::new("EUR", 0.9)];
        let mut buf = Vec::new();
        write_json(&mut buf, &prices).unwrap();

        let back: Vec<Price> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, prices);
    }

    #[test]
    fn empty_list_prints_nothing_or_empty_array() {
        let mut buf = Vec::new();
        write_plain(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());

        let mut buf = Vec::new();
        write_json(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
