use std::path::Path;

use anyhow::Context;
use r_htslib::*;

/// Open input file for sequential reading.  No index is needed as we
/// always visit every record in file order.
pub fn open_input<P: AsRef<Path>>(name: P) -> anyhow::Result<Hts> {
    let name = name.as_ref();
    debug!("Try to open input file {}", name.display());

    // Try opening input file
    let hts = Hts::open(name, "r")
        .with_context(|| format!("Failed to open input file {}", name.display()))?;

    // Check that this is a SAM type file (SAM/BAM/CRAM)
    if !matches!(hts.rec_type(), Some(HtsRecType::Sam)) {
        Err(anyhow!(
            "Incorrect file format for input file {}",
            name.display()
        ))
    } else {
        Ok(hts)
    }
}
