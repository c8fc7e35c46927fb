//! Tile record I/O: the line-oriented text format of spec §6.1. Grounded on
//! `original_source/src/tileio.h` (`TileInfo::TileInfo(istream&)`,
//! `TileInfo::write`, `IntReader`'s digit-run scanning, the naked-record and
//! patch-block conventions).

use std::io::BufRead;

use anyhow::{Context, bail};

use crate::{
    geom::{Point, Transform},
    grid::{Grid, GridCode},
    shape::Shape,
    solver::Patch,
};

/// A record's classification (spec §6.1 line 2), carrying whatever patch
/// data that classification's line format allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordType {
    Unknown,
    Hole,
    Inconclusive,
    NonTiler { hc: usize, hh: usize, hc_patch: Patch, hh_patch: Patch },
    Isohedral { transitivity: usize },
    /// Reserved: not produced by this core (spec §6.1).
    Anisohedral { transitivity: usize },
    /// Reserved: not produced by this core (spec §6.1).
    Aperiodic,
}

/// A parsed record before its cell coordinates have been bound to a concrete
/// grid family. Text-level structure (line count, naked-record detection,
/// integer scanning) doesn't depend on which of the nine families the
/// leading grid code names, so this stage is grid-generic; [`RawRecord::bind`]
/// does the grid-specific part.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub grid_code: GridCode,
    pub naked: bool,
    pub cells: Vec<Point>,
    type_line: Option<String>,
    patch_lines: Vec<Vec<String>>,
}

/// Scans whitespace-separated, possibly-negative integers out of a line,
/// mirroring `tileio.h`'s `IntReader` digit-run scan.
fn scan_ints(line: &str) -> Vec<i32> {
    line.split_whitespace().filter_map(|tok| tok.parse().ok()).collect()
}

impl RawRecord {
    /// Reads one record (1-4 lines) from `reader`. Returns `Ok(None)` at
    /// end of input.
    pub fn read<R: BufRead>(reader: &mut R) -> anyhow::Result<Option<RawRecord>> {
        let mut line1 = String::new();
        if reader.read_line(&mut line1)? == 0 {
            return Ok(None);
        }
        let line1 = line1.trim_end_matches(['\n', '\r']);
        let Some(code_ch) = line1.chars().next() else {
            bail!("empty record line");
        };
        let grid_code = GridCode::from_char(code_ch)
            .with_context(|| format!("unrecognized grid code '{code_ch}'"))?;
        let rest = &line1[code_ch.len_utf8()..];
        let naked = rest.starts_with('?');
        let rest = if naked { &rest[1..] } else { rest };

        let ints = scan_ints(rest);
        if ints.len() % 2 != 0 {
            bail!("odd number of coordinates in record: {rest:?}");
        }
        let cells: Vec<Point> = ints.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect();

        if naked {
            return Ok(Some(RawRecord { grid_code, naked, cells, type_line: None, patch_lines: vec![] }));
        }

        let mut type_line = String::new();
        if reader.read_line(&mut type_line)? == 0 {
            bail!("unexpected end of input after naked cell line");
        }
        let type_line = type_line.trim_end_matches(['\n', '\r']).to_owned();

        let mut patch_lines = Vec::new();
        if type_line.starts_with('~') && type_line.contains('P') {
            let ints = scan_ints(&type_line[1..]);
            let hc = *ints.first().unwrap_or(&0) as usize;
            let hh = *ints.get(1).unwrap_or(&0) as usize;

            if hc > 0 {
                patch_lines.push(read_patch_block(reader)?);
            }
            if hh != hc {
                patch_lines.push(read_patch_block(reader)?);
            }
        }

        Ok(Some(RawRecord { grid_code, naked, cells, type_line: Some(type_line), patch_lines }))
    }

    /// Binds this record's cells and patch transforms to a concrete grid
    /// family, producing a [`Shape`] and the parsed [`RecordType`]. Fails if
    /// any cell is off-lattice for `G` (spec §7's "input parse error": the
    /// caller should skip the record and log, not abort the run).
    pub fn bind<G: Grid>(&self) -> anyhow::Result<(Shape<G>, RecordType)> {
        for &p in &self.cells {
            if !G::is_valid_cell(p) {
                bail!("cell {p} is not a valid '{}' grid cell", G::CODE);
            }
        }

        let mut shape = Shape::<G>::new();
        for &p in &self.cells {
            shape.add(p);
        }
        shape.complete();

        if self.naked {
            return Ok((shape, RecordType::Unknown));
        }

        let type_line = self.type_line.as_deref().unwrap_or("?");
        let Some(kind) = type_line.chars().next() else { bail!("empty record-type line") };

        let record_type = match kind {
            '?' => RecordType::Unknown,
            'O' => RecordType::Hole,
            '!' => RecordType::Inconclusive,
            '~' => {
                let ints = scan_ints(&type_line[1..]);
                let hc = *ints.first().context("non-tiler record missing Hc")? as usize;
                let hh = *ints.get(1).context("non-tiler record missing Hh")? as usize;

                let mut blocks = self.patch_lines.iter();
                let hc_patch = if hc > 0 {
                    parse_patch_block(blocks.next().context("missing Hc patch block")?)?
                } else {
                    vec![(0, Transform::IDENTITY)]
                };
                let hh_patch = if hh != hc {
                    parse_patch_block(blocks.next().context("missing Hh patch block")?)?
                } else {
                    hc_patch.clone()
                };

                RecordType::NonTiler { hc, hh, hc_patch, hh_patch }
            }
            'I' => {
                let ints = scan_ints(&type_line[1..]);
                let transitivity = *ints.first().unwrap_or(&1) as usize;
                RecordType::Isohedral { transitivity }
            }
            '#' => {
                let ints = scan_ints(&type_line[1..]);
                RecordType::Anisohedral { transitivity: *ints.first().unwrap_or(&1) as usize }
            }
            '$' => RecordType::Aperiodic,
            other => bail!("unrecognized record type '{other}'"),
        };

        Ok((shape, record_type))
    }
}

fn read_patch_block<R: BufRead>(reader: &mut R) -> anyhow::Result<Vec<String>> {
    let mut count_line = String::new();
    reader.read_line(&mut count_line)?;
    let n: usize = count_line.trim().parse().context("invalid patch count line")?;
    let mut lines = Vec::with_capacity(n);
    for _ in 0..n {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("unexpected end of input while reading patch block");
        }
        lines.push(line.trim_end_matches(['\n', '\r']).to_owned());
    }
    Ok(lines)
}

fn parse_patch_block(lines: &[String]) -> anyhow::Result<Patch> {
    lines
        .iter()
        .map(|line| {
            let (level_str, xform_str) =
                line.split_once(';').context("patch line missing ';' separator")?;
            let level: usize = level_str.trim().parse().context("invalid corona level")?;
            let nums = scan_ints(xform_str);
            if nums.len() != 6 {
                bail!("transform must have exactly 6 components, got {}", nums.len());
            }
            Ok((level, Transform::new(nums[0], nums[1], nums[2], nums[3], nums[4], nums[5])))
        })
        .collect()
}

/// Renders a record in the text format of spec §6.1 (the inverse of
/// [`RawRecord::read`] + [`RawRecord::bind`]).
pub fn write_record<G: Grid>(shape: &Shape<G>, record_type: &RecordType) -> String {
    let mut out = String::new();
    out.push(G::CODE);
    if *record_type == RecordType::Unknown {
        out.push('?');
    }
    for &p in shape.cells() {
        out.push_str(&format!(" {} {}", p.x, p.y));
    }
    out.push('\n');

    if *record_type == RecordType::Unknown {
        return out;
    }

    match record_type {
        RecordType::Unknown => unreachable!(),
        RecordType::Hole => out.push_str("O\n"),
        RecordType::Inconclusive => out.push_str("!\n"),
        RecordType::NonTiler { hc, hh, hc_patch, hh_patch } => {
            out.push_str(&format!("~ {hc} {hh}"));
            let has_patch = !hc_patch.is_empty() || !hh_patch.is_empty();
            if has_patch {
                out.push_str(" P");
            }
            out.push('\n');
            if has_patch {
                if *hc > 0 {
                    write_patch_block(&mut out, hc_patch);
                }
                if hh != hc {
                    write_patch_block(&mut out, hh_patch);
                }
            }
        }
        RecordType::Isohedral { transitivity } => out.push_str(&format!("I {transitivity}\n")),
        RecordType::Anisohedral { transitivity } => out.push_str(&format!("# {transitivity}\n")),
        RecordType::Aperiodic => out.push_str("$\n"),
    }

    out
}

fn write_patch_block(out: &mut String, patch: &Patch) {
    out.push_str(&format!("{}\n", patch.len()));
    for (level, t) in patch {
        out.push_str(&format!("{level} ; <{},{},{},{},{},{}>\n", t.a, t.b, t.c, t.d, t.e, t.f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{drafter::Drafter, omino::Omino};

    #[test]
    fn off_lattice_cell_is_rejected_instead_of_panicking() {
        let raw = RawRecord::read(&mut "D? 0 0\n".as_bytes()).unwrap().unwrap();
        let err = raw.bind::<Drafter>().unwrap_err();
        assert!(err.to_string().contains("not a valid"));
    }

    #[test]
    fn round_trips_a_naked_record() {
        let raw = RawRecord::read(&mut "O? 0 0 1 0\n".as_bytes()).unwrap().unwrap();
        let (shape, record_type): (Shape<Omino>, _) = raw.bind().unwrap();
        assert_eq!(record_type, RecordType::Unknown);
        let text = write_record(&shape, &record_type);
        assert_eq!(text, "O? 0 0 1 0\n");
    }

    #[test]
    fn round_trips_a_hole_record() {
        let raw = RawRecord::read(&mut "O 0 0 5 5\nO\n".as_bytes()).unwrap().unwrap();
        let (shape, record_type): (Shape<Omino>, _) = raw.bind().unwrap();
        assert_eq!(record_type, RecordType::Hole);
        let text = write_record(&shape, &record_type);
        assert_eq!(text, "O 0 0 5 5\nO\n");
    }

    #[test]
    fn round_trips_an_isohedral_record() {
        let raw = RawRecord::read(&mut "O 0 0\nI 1\n".as_bytes()).unwrap().unwrap();
        let (_, record_type): (Shape<Omino>, _) = raw.bind().unwrap();
        assert_eq!(record_type, RecordType::Isohedral { transitivity: 1 });
    }

    #[test]
    fn round_trips_a_non_tiler_with_patch() {
        let input = "O 0 0 1 0 2 0 1 1\n~ 2 2 P\n2\n0 ; <1,0,0,0,1,0>\n1 ; <1,0,1,0,1,0>\n";
        let raw = RawRecord::read(&mut input.as_bytes()).unwrap().unwrap();
        let (shape, record_type): (Shape<Omino>, _) = raw.bind().unwrap();
        let RecordType::NonTiler { hc, hh, hc_patch, .. } = &record_type else {
            panic!("expected NonTiler");
        };
        assert_eq!(*hc, 2);
        assert_eq!(*hh, 2);
        assert_eq!(hc_patch.len(), 2);
        let text = write_record(&shape, &record_type);
        let reparsed = RawRecord::read(&mut text.as_bytes()).unwrap().unwrap();
        let (_, reparsed_type): (Shape<Omino>, _) = reparsed.bind().unwrap();
        assert_eq!(reparsed_type, record_type);
    }
}
