use std::{
    collections::HashMap,
    io::{self, Write},
};

use r_htslib::*;

use crate::{config::Config, input::open_input};

/// Tally of mapped records per read name
///
/// Multiple alignments of a read are reported individually in the input,
/// so a name seen in more than one mapped record is a multimapper.
#[derive(Default)]
struct ReadCounts {
    counts: HashMap<String, usize>,
}

impl ReadCounts {
    fn add_mapped(&mut self, name: &str) {
        if let Some(x) = self.counts.get_mut(name) {
            *x += 1
        } else {
            self.counts.insert(name.to_owned(), 1);
        }
    }

    /// Number of distinct read names seen in mapped records
    fn total_unique(&self) -> usize {
        self.counts.len()
    }

    /// Number of distinct read names seen in more than one mapped record
    fn multi_mapped(&self) -> usize {
        self.counts.values().filter(|n| **n > 1).count()
    }
}

/// Read all records from input file in file order, counting mapped
/// records per read name.  Unmapped records are skipped.
fn count_reads(cfg: &Config) -> anyhow::Result<ReadCounts> {
    let mut hts = open_input(cfg.input())?;
    let mut rec = BamRec::new()?;
    let mut rc = ReadCounts::default();
    let mut n_rec = 0usize;

    while rec.read(&mut hts)? {
        n_rec += 1;
        if (rec.flag() & BAM_FUNMAP) == 0 {
            let name = rec.qname().ok_or_else(|| {
                anyhow!(
                    "Missing read name for record {} in {}",
                    n_rec,
                    cfg.input().display()
                )
            })?;
            rc.add_mapped(name)
        } else {
            trace!("Skipping unmapped record {}", n_rec)
        }
    }
    debug!(
        "Finished reading {} records from {}",
        n_rec,
        cfg.input().display()
    );
    Ok(rc)
}

pub fn process_file(cfg: &Config) -> anyhow::Result<()> {
    debug!("Starting processing");

    let rc = count_reads(cfg)?;

    let mut wrt = io::stdout().lock();
    writeln!(
        wrt,
        "{}\tReads:\t{}\tof which multimappers:\t{}",
        cfg.input().display(),
        rc.total_unique(),
        rc.multi_mapped()
    )?;
    Ok(())
}
