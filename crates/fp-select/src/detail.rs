use std::io::{self, Write};

use fp_registry::FinalityProvider;

const RULE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 16;
const MISSING: &str = "N/A";

/// Write every field of the selected provider, including the untruncated
/// public key. Commission is shown as sent by the registry.
pub fn write_details<W: Write>(mut writer: W, provider: &FinalityProvider) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let field = |label: &str, value: &dyn std::fmt::Display| {
        format!("{label:<LABEL_WIDTH$}{value}")
    };

    writeln!(writer)?;
    writeln!(writer, "{heavy}")?;
    writeln!(writer, "SELECTED FINALITY PROVIDER")?;
    writeln!(writer, "{heavy}")?;
    writeln!(writer, "{}", field("Moniker:", &or_missing(provider.moniker())))?;
    writeln!(writer, "{}", field("Identity:", &or_missing(provider.identity())))?;
    writeln!(writer, "{}", field("Website:", &or_missing(provider.website())))?;
    writeln!(
        writer,
        "{}",
        field("Security:", &or_missing(provider.security_contact()))
    )?;
    writeln!(writer, "{}", field("Details:", &or_missing(provider.details())))?;
    writeln!(writer, "{light}")?;
    writeln!(
        writer,
        "{}",
        field("Commission:", &or_missing(provider.commission.as_deref()))
    )?;
    writeln!(
        writer,
        "{}",
        field("Address:", &or_missing(provider.addr.as_deref()))
    )?;
    writeln!(writer, "{}", field("Jailed:", &provider.jailed))?;
    writeln!(
        writer,
        "{}",
        field("Slashed BBN:", &provider.slashed_babylon_height)
    )?;
    writeln!(
        writer,
        "{}",
        field("Slashed BTC:", &provider.slashed_btc_height)
    )?;
    writeln!(writer, "{heavy}")?;
    writeln!(writer)?;
    writeln!(writer, "BTC PUBLIC KEY (hex):")?;
    writeln!(writer, "{light}")?;
    writeln!(writer, "{}", or_missing(provider.btc_pk.as_deref()))?;
    writeln!(writer, "{heavy}")?;
    writer.flush()
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}
