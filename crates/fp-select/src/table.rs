use std::borrow::Borrow;
use std::io::{self, Write};
use std::str::FromStr;

use fp_registry::FinalityProvider;
use fp_ui::{Alignment, pad_text, truncate_coarse};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::status::classify;

const ORDINAL_WIDTH: usize = 5;
const NAME_WIDTH: usize = 35;
const STATUS_WIDTH: usize = 10;
const COMMISSION_WIDTH: usize = 7;
const PUBKEY_WIDTH: usize = 13;
/// Characters of the public key shown before the ellipsis.
const PUBKEY_PREFIX: usize = 10;
/// Characters dropped from a long moniker per truncation pass.
const TRUNCATE_STEP: usize = 4;
const RULE_WIDTH: usize =
    ORDINAL_WIDTH + NAME_WIDTH + STATUS_WIDTH + COMMISSION_WIDTH + PUBKEY_WIDTH + 6;

const MISSING: &str = "N/A";

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("No finality providers found.")]
    Empty,

    #[error("{labels} ordinal labels supplied for {rows} rows")]
    LabelMismatch { labels: usize, rows: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write `providers` as an aligned table followed by a record count.
///
/// `labels` are the ordinals printed in the `#` column, one per provider; when
/// `None` the rows are numbered `1..=N`. An empty listing is an error since
/// there is nothing to select from.
pub fn write_table<W, P>(
    mut writer: W,
    providers: &[P],
    labels: Option<&[usize]>,
) -> Result<(), TableError>
where
    W: Write,
    P: Borrow<FinalityProvider>,
{
    if providers.is_empty() {
        return Err(TableError::Empty);
    }
    let labels: Vec<usize> = match labels {
        Some(labels) if labels.len() != providers.len() => {
            return Err(TableError::LabelMismatch {
                labels: labels.len(),
                rows: providers.len(),
            });
        }
        Some(labels) => labels.to_vec(),
        None => (1..=providers.len()).collect(),
    };

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(writer)?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "{}", format_header())?;
    writeln!(writer, "{rule}")?;
    for (ordinal, provider) in labels.iter().zip(providers) {
        let provider: &FinalityProvider = provider.borrow();
        writeln!(writer, "{}", format_row(*ordinal, provider))?;
    }
    writeln!(writer, "{rule}")?;
    writeln!(writer)?;
    writeln!(writer, "Total finality providers: {}", providers.len())?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

fn format_header() -> String {
    format!(
        "{:<ORDINAL_WIDTH$} {:<NAME_WIDTH$} {:<STATUS_WIDTH$} {:<COMMISSION_WIDTH$}   {}",
        "#", "Description", "Status", "Commission", "BTC PubKey"
    )
}

fn format_row(ordinal: usize, provider: &FinalityProvider) -> String {
    let name = format_moniker(provider.moniker().unwrap_or(MISSING));
    format!(
        "{:<ORDINAL_WIDTH$} {} {:<STATUS_WIDTH$} {:>COMMISSION_WIDTH$}   {}",
        ordinal,
        pad_text(&name, NAME_WIDTH, Alignment::Left),
        classify(provider),
        format_commission(provider.commission.as_deref()),
        format_pubkey(provider.btc_pk.as_deref().unwrap_or(MISSING)),
    )
}

/// Keep one column of the name cell free so adjacent cells never touch.
fn format_moniker(moniker: &str) -> String {
    truncate_coarse(moniker, NAME_WIDTH - 1, TRUNCATE_STEP)
}

/// Render a decimal commission rate as a percentage, e.g. `"0.1"` as
/// `"10.00%"`. Anything that is not a finite number renders as `N/A`.
pub fn format_commission(raw: Option<&str>) -> String {
    let Some(text) = raw.map(str::trim) else {
        return MISSING.to_string();
    };

    let exact = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .and_then(|rate| rate.checked_mul(Decimal::ONE_HUNDRED));
    if let Some(pct) = exact {
        let pct = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        return format!("{pct:.2}%");
    }

    // Exponents outside Decimal's range, e.g. "1e-100" or "9e28".
    match text.parse::<f64>() {
        Ok(rate) if rate.is_finite() && (rate * 100.0).is_finite() => {
            format!("{:.2}%", rate * 100.0)
        }
        _ => MISSING.to_string(),
    }
}

fn format_pubkey(pk: &str) -> String {
    if pk.chars().count() > PUBKEY_PREFIX {
        pk.chars().take(PUBKEY_PREFIX).collect::<String>() + "..."
    } else {
        pk.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_registry::Description;
    use fp_ui::display_width;

    fn provider(moniker: &str, commission: Option<&str>, pk: &str) -> FinalityProvider {
        FinalityProvider {
            description: Some(Description {
                moniker: Some(moniker.to_string()),
                ..Default::default()
            }),
            commission: commission.map(str::to_string),
            btc_pk: Some(pk.to_string()),
            ..Default::default()
        }
    }

    fn render(providers: &[FinalityProvider], labels: Option<&[usize]>) -> String {
        let mut out: Vec<u8> = Vec::new();
        write_table(&mut out, providers, labels).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_commission() {
        assert_eq!(format_commission(Some("0.1")), "10.00%");
        assert_eq!(format_commission(Some("0.05")), "5.00%");
        assert_eq!(format_commission(Some("0.050000000000000000")), "5.00%");
        assert_eq!(format_commission(Some("1")), "100.00%");
        assert_eq!(format_commission(Some("0.00125")), "0.13%");
        assert_eq!(format_commission(Some(" 0.2 ")), "20.00%");
        assert_eq!(format_commission(Some("5e-2")), "5.00%");
    }

    #[test]
    fn test_format_commission_out_of_decimal_range() {
        assert_eq!(format_commission(Some("1e-100")), "0.00%");

        let huge = format_commission(Some("9e28"));
        let value: f64 = huge.strip_suffix('%').unwrap().parse().unwrap();
        assert!((value / 9e30 - 1.0).abs() < 1e-12, "{huge}");
    }

    #[test]
    fn test_format_commission_invalid() {
        assert_eq!(format_commission(Some("abc")), "N/A");
        assert_eq!(format_commission(Some("inf")), "N/A");
        assert_eq!(format_commission(Some("NaN")), "N/A");
        assert_eq!(format_commission(Some("1e309")), "N/A");
        assert_eq!(format_commission(Some("")), "N/A");
        assert_eq!(format_commission(None), "N/A");
    }

    #[test]
    fn test_format_pubkey() {
        assert_eq!(format_pubkey("0123456789abcdef"), "0123456789...");
        assert_eq!(format_pubkey("0123456789"), "0123456789");
        assert_eq!(format_pubkey("N/A"), "N/A");
    }

    #[test]
    fn test_format_moniker_truncation() {
        let long = "x".repeat(50);
        let name = format_moniker(&long);
        assert!(display_width(&name) <= NAME_WIDTH - 1);
        assert!(name.ends_with("..."));
        assert_eq!(format_moniker("short"), "short");
    }

    #[test]
    fn test_empty_listing_is_an_error() {
        let mut out: Vec<u8> = Vec::new();
        let providers: Vec<FinalityProvider> = Vec::new();
        let err = write_table(&mut out, &providers, None).unwrap_err();
        assert!(matches!(err, TableError::Empty));
        assert_eq!(err.to_string(), "No finality providers found.");
        assert!(out.is_empty());
    }

    #[test]
    fn test_label_mismatch() {
        let providers = vec![provider("Alpha", None, "pk")];
        let err = write_table(Vec::<u8>::new(), &providers, Some(&[1, 2][..])).unwrap_err();
        assert!(matches!(err, TableError::LabelMismatch { labels: 2, rows: 1 }));
    }

    #[test]
    fn test_renders_listing() {
        let providers = vec![
            provider("Alpha", Some("0.1"), "02a1b2c3d4e5f6a7b8c9"),
            provider("Beta", Some("abc"), "short"),
            FinalityProvider {
                jailed: true,
                ..provider("gamma-node", Some("0.05"), "f00dfacecafebeef")
            },
        ];
        let out = render(&providers, None);
        insta::assert_snapshot!(out.trim(), @r"
        ============================================================================
        #     Description                         Status     Commission   BTC PubKey
        ============================================================================
        1     Alpha                               active      10.00%   02a1b2c3d4...
        2     Beta                                active         N/A   short
        3     gamma-node                          jailed       5.00%   f00dfaceca...
        ============================================================================

        Total finality providers: 3
        ");
    }

    #[test]
    fn test_renders_supplied_labels() {
        let providers = vec![
            provider("Beta", Some("0.1"), "pk-beta"),
            provider("gamma-node", Some("0.1"), "pk-gamma"),
        ];
        let out = render(&providers, Some(&[2, 7][..]));
        let rows: Vec<&str> = out
            .lines()
            .filter(|line| line.contains("pk-"))
            .collect();
        assert!(rows[0].starts_with("2     Beta"));
        assert!(rows[1].starts_with("7     gamma-node"));
        assert!(out.contains("Total finality providers: 2"));
    }

    #[test]
    fn test_columns_align_with_wide_names() {
        let names = [
            "plain",
            "ノードオペレーター",
            "🚀 Rocket Staking",
            "e\u{301}clair",
            "Zürich Validators",
            "超级长的名字超级长的名字超级长的名字超级长的名字",
            "a very long moniker that certainly does not fit in the column",
        ];
        let providers: Vec<FinalityProvider> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| provider(name, Some("0.1"), &format!("pk{idx}")))
            .collect();
        let out = render(&providers, None);

        let rows: Vec<&str> = out.lines().filter(|line| line.contains("   pk")).collect();
        assert_eq!(rows.len(), names.len());
        for row in rows {
            let status_at = row.find(" active ").unwrap() + 1;
            assert_eq!(display_width(&row[..status_at]), 42, "{row}");
            let pk_at = row.find("pk").unwrap();
            assert_eq!(display_width(&row[..pk_at]), 63, "{row}");
        }
    }
}
