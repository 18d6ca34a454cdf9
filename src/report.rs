use crate::rank::{RankedEntry, Ranking};
use anyhow::Result;
use std::{io::Write, str::FromStr};

pub const NO_CODES_MESSAGE: &str = "No error codes found in logs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Csv,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Format::Table),
            "csv" => Ok(Format::Csv),
            other => Err(format!("unknown format {:?}, expected \"table\" or \"csv\"", other)),
        }
    }
}

/// Write the ranking to `writer` in the chosen format. `top_k` is only used for the table heading.
pub fn write_report(mut writer: impl Write, ranking: &Ranking, top_k: i64, format: Format) -> Result<()> {
    let entries = match ranking {
        Ranking::NoData => {
            writeln!(writer, "{}", NO_CODES_MESSAGE)?;
            return Ok(());
        }
        Ranking::Top(entries) => entries,
    };
    match format {
        Format::Table => write_table(writer, entries, top_k),
        Format::Csv => write_csv(writer, entries),
    }
}

fn write_table(mut writer: impl Write, entries: &[RankedEntry], top_k: i64) -> Result<()> {
    writeln!(writer, "Top {} error codes:", top_k)?;
    writeln!(writer, "----------------------")?;
    writeln!(writer, "| Code | Count | Percentage |")?;
    writeln!(writer, "|------|-------|------------|")?;
    for entry in entries {
        writeln!(writer, "| {:<4} | {:>5} | {:>8}% |", entry.code, entry.count, entry.percentage)?;
    }
    Ok(())
}

fn write_csv(writer: impl Write, entries: &[RankedEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["Code", "Count", "Percentage"])?;
    for entry in entries {
        writer.write_record([entry.code.clone(), entry.count.to_string(), entry.percentage.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ranking {
        Ranking::Top(vec![
            RankedEntry {
                code: String::from("TIMEOUT"),
                count: 3,
                percentage: 75.0,
            },
            RankedEntry {
                code: String::from("IO"),
                count: 1,
                percentage: 33.33,
            },
        ])
    }

    fn render(ranking: &Ranking, top_k: i64, format: Format) -> String {
        let mut out = Vec::new();
        write_report(&mut out, ranking, top_k, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_data_message() {
        assert_eq!(render(&Ranking::NoData, 5, Format::Table), "No error codes found in logs.\n");
        assert_eq!(render(&Ranking::NoData, 5, Format::Csv), "No error codes found in logs.\n");
    }

    #[test]
    fn test_table() {
        let expected = "Top 2 error codes:\n\
                        ----------------------\n\
                        | Code | Count | Percentage |\n\
                        |------|-------|------------|\n\
                        | TIMEOUT |     3 |       75% |\n\
                        | IO   |     1 |    33.33% |\n";
        assert_eq!(render(&sample(), 2, Format::Table), expected);
    }

    #[test]
    fn test_table_without_rows() {
        let rendered = render(&Ranking::Top(Vec::new()), 0, Format::Table);
        assert!(rendered.starts_with("Top 0 error codes:\n"));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn test_csv() {
        assert_eq!(
            render(&sample(), 2, Format::Csv),
            "Code,Count,Percentage\nTIMEOUT,3,75\nIO,1,33.33\n"
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("table".parse::<Format>(), Ok(Format::Table));
        assert_eq!("CSV".parse::<Format>(), Ok(Format::Csv));
        assert!("json".parse::<Format>().is_err());
    }
}
