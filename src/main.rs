use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, bail};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use log::{info, warn};
use owo_colors::OwoColorize;
use rustsat::solvers::{Interrupt, InterruptSolver};

use heesch_solver::{
    config::{OrientationSubset, RunConfig},
    dispatch_grid,
    enumerator::{enumerate_fixed, enumerate_free},
    grid::{Grid, GridCode},
    record::{RawRecord, RecordType, write_record},
    shape::Shape,
    solver::{CoronaResult, HeeschSolver, Patch},
};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enumerates polyforms of a grid family, writing naked records to stdout.
    Gen {
        /// Grid family dispatch code (O, H, I, o, T, A, D, K, h).
        grid: char,
        /// Number of cells per generated polyform.
        #[arg(long = "size")]
        size: usize,
        /// Collapse symmetric copies to one canonical representative.
        #[arg(long)]
        free: bool,
        /// Compound enumeration over units read from standard input.
        #[arg(long)]
        units: bool,
        /// Report only shapes whose own cell set encloses a hole.
        #[arg(long)]
        holes: bool,
    },
    /// Reads tile records from stdin and computes a Heesch number for each.
    Sat {
        /// Emit Hc/Hh patches in the written record.
        #[arg(long)]
        show: bool,
        /// Corona-level search cap. Overrides `--config`'s `max_level`;
        /// defaults to 7 if neither is given.
        #[arg(long = "maxlevel")]
        max_level: Option<usize>,
        /// Restrict the orientation subset to pure translations. Overrides
        /// `--config`'s `orientation_subset`.
        #[arg(long)]
        translations: bool,
        /// Restrict the orientation subset to rotations and translations.
        /// Overrides `--config`'s `orientation_subset`.
        #[arg(long)]
        rotations: bool,
        /// Run the isohedral-tiling shortcut (spec §4.6.4) before searching.
        /// Overrides `--config`'s `isohedral_shortcut`.
        #[arg(long)]
        isohedral: bool,
        /// Also record Hh, the best corona level reachable by allowing
        /// adjacency holes in the outer ring.
        #[arg(long)]
        hh: bool,
        /// Enable placement-reduction optimizations.
        #[arg(long)]
        reduce: bool,
        /// Reprocess only records of type UNKNOWN or INCONCLUSIVE.
        #[arg(long)]
        update: bool,
        /// Write the resulting record stream here instead of stdout.
        #[arg(short = 'o', long = "outfile")]
        outfile: Option<PathBuf>,
        /// Load `sat`-subcommand defaults (§13) from a TOML config file.
        /// Flags passed explicitly on the command line take precedence.
        #[arg(long = "config")]
        config: Option<PathBuf>,
    },
    /// Summarizes a record stream read from stdin by classification.
    Report,
    /// Enumerates the distinct level-k surrounds of a single shape read from
    /// stdin.
    Surrounds {
        #[arg(long = "level")]
        level: usize,
        /// Exclude reflected placements.
        #[arg(long = "noreflections")]
        no_reflections: bool,
        /// Report only placements not already reachable at an earlier level.
        #[arg(long)]
        extremes: bool,
    },
}

fn parse_or_readline() -> anyhow::Result<Cli> {
    if std::env::args_os().len() > 1 {
        return Ok(Cli::parse());
    }

    let mut cmd = Cli::command().no_binary_name(true);

    println!("No CLI arguments were provided");
    println!("Specify arguments via stdin:");
    println!("{}", cmd.render_long_help());

    std::io::stdout().flush().context("could not write to stdout")?;
    let mut buffer = String::new();
    std::io::stdin().read_line(&mut buffer).context("could not read stdin")?;

    let args = shlex::split(buffer.trim()).context("invalid quoting")?;
    let matches = cmd.try_get_matches_from(args).context("failed to parse args")?;

    Cli::from_arg_matches(&matches).context("failed to parse args")
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let interrupter: Arc<Mutex<Option<Box<dyn InterruptSolver + Send>>>> = Arc::new(Mutex::new(None));

    if let Err(err) = ctrlc::set_handler({
        let interrupter = interrupter.clone();
        let mut is_repeat = false;
        move || {
            if is_repeat {
                warn!("Aborting immediately");
                std::process::exit(-1);
            }

            is_repeat = true;
            warn!("Stopping...");
            if let Some(int) = &*interrupter.lock().expect("Mutex was poisoned!") {
                int.interrupt();
            }
        }
    }) {
        warn!("Failed to set interrupt handler! {}", err);
    }

    let args = parse_or_readline()?;

    match args.cmd {
        Command::Gen { grid, size, free, units, holes } => run_gen(grid, size, free, units, holes),
        Command::Sat { show, max_level, translations, rotations, isohedral, hh, reduce, update, outfile, config } => {
            run_sat(
                SatOptions { show, max_level, translations, rotations, isohedral, hh, reduce, update, outfile, config },
                interrupter,
            )
        }
        Command::Report => run_report(),
        Command::Surrounds { level, no_reflections, extremes } => run_surrounds(level, no_reflections, extremes),
    }
}

fn run_gen(grid_ch: char, size: usize, free: bool, units: bool, holes: bool) -> anyhow::Result<()> {
    if units {
        bail!(
            "gen -units (compound-unit enumeration over units read from standard input) is not \
             implemented by this core; enumerate fixed units individually instead"
        );
    }

    let code =
        GridCode::from_char(grid_ch).with_context(|| format!("unrecognized grid code '{grid_ch}'"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_grid!(code, gen_for_grid, size, free, holes, &mut out)
}

fn gen_for_grid<G: Grid>(size: usize, free: bool, holes: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let shapes = if free { enumerate_free::<G>(size) } else { enumerate_fixed::<G>(size) };
    for shape in &shapes {
        if holes {
            if !shape.simply_connected() {
                write!(out, "{}", write_record(shape, &RecordType::Hole))?;
            }
        } else {
            write!(out, "{}", write_record(shape, &RecordType::Unknown))?;
        }
    }
    Ok(())
}

struct SatOptions {
    show: bool,
    max_level: Option<usize>,
    translations: bool,
    rotations: bool,
    isohedral: bool,
    hh: bool,
    reduce: bool,
    update: bool,
    outfile: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn run_sat(
    opts: SatOptions,
    interrupter: Arc<Mutex<Option<Box<dyn InterruptSolver + Send>>>>,
) -> anyhow::Result<()> {
    if opts.reduce {
        warn!("-reduce requests placement-reduction optimizations this core doesn't implement; continuing without them");
    }

    let run_config = match &opts.config {
        Some(path) => RunConfig::load(path).with_context(|| format!("failed to load --config {}", path.display()))?,
        None => RunConfig::default(),
    };

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let mut sink: Box<dyn Write> = match &opts.outfile {
        Some(path) => {
            info!("Writing records to {}", path.display());
            Box::new(File::create(path).context("failed to create -o outfile")?)
        }
        None => Box::new(io::stdout()),
    };

    while let Some(raw) = RawRecord::read(&mut reader)? {
        match dispatch_grid!(raw.grid_code, process_record, &raw, &opts, &run_config, &interrupter) {
            Ok(text) => sink.write_all(text.as_bytes())?,
            Err(err) => {
                // spec §7: malformed/off-lattice records are skipped, not
                // fatal to the batch.
                log::error!("skipping record: {err:#}");
            }
        }
    }

    Ok(())
}

fn process_record<G: Grid>(
    raw: &RawRecord,
    opts: &SatOptions,
    run_config: &RunConfig,
    interrupter: &Arc<Mutex<Option<Box<dyn InterruptSolver + Send>>>>,
) -> anyhow::Result<String> {
    let (shape, existing) = raw.bind::<G>()?;

    if existing == RecordType::Hole {
        return Ok(write_record(&shape, &existing));
    }
    if opts.update && !matches!(existing, RecordType::Unknown | RecordType::Inconclusive) {
        return Ok(write_record(&shape, &existing));
    }

    let record_type = compute_heesch::<G>(shape.clone(), opts, run_config, interrupter)?;
    Ok(write_record(&shape, &record_type))
}

/// Drives the incremental corona search up to `opts.max_level` (or
/// `run_config.max_level` when `-maxlevel` wasn't passed), replacing
/// `sat.cpp`'s `computeHeesch` loop with a version that breaks as soon as
/// `hasCorona` reports no corona at all, rather than re-querying the same
/// level indefinitely.
fn compute_heesch<G: Grid>(
    shape: Shape<G>,
    opts: &SatOptions,
    run_config: &RunConfig,
    interrupter: &Arc<Mutex<Option<Box<dyn InterruptSolver + Send>>>>,
) -> anyhow::Result<RecordType> {
    let orientation_subset = if opts.translations {
        OrientationSubset::TranslationsOnly
    } else if opts.rotations {
        OrientationSubset::RotationsOnly
    } else {
        run_config.orientation_subset
    };

    let max_level = opts.max_level.unwrap_or(run_config.max_level);
    let run_isohedral_shortcut = opts.isohedral || run_config.isohedral_shortcut;

    let mut solver = HeeschSolver::new_with_orientations(shape, orientation_subset);
    solver.set_interrupt_slot(interrupter.clone());

    if run_isohedral_shortcut && solver.isohedral_shortcut().is_some() {
        return Ok(RecordType::Isohedral { transitivity: 1 });
    }

    solver.increase_level();

    let mut hc = 0usize;
    let mut hc_patch: Patch = Vec::new();
    let mut hh = 0usize;
    let mut hh_patch: Patch = Vec::new();

    loop {
        if solver.level() > max_level {
            return Ok(RecordType::Inconclusive);
        }

        match solver.has_corona(solver.level())? {
            CoronaResult::HoleFree(patch) => {
                hc = solver.level();
                hh = hc;
                hc_patch = patch.clone();
                hh_patch = patch;
                solver.increase_level();
            }
            CoronaResult::HasHoles(patch) => {
                if opts.hh {
                    hh = solver.level();
                    hh_patch = patch;
                }
                break;
            }
            CoronaResult::None => break,
            CoronaResult::Inconclusive => return Ok(RecordType::Inconclusive),
        }
    }

    Ok(RecordType::NonTiler {
        hc,
        hh,
        hc_patch: if opts.show { hc_patch } else { Vec::new() },
        hh_patch: if opts.show { hh_patch } else { Vec::new() },
    })
}

fn run_report() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let mut unknown = 0usize;
    let mut hole = 0usize;
    let mut inconclusive = 0usize;
    let mut non_tiler = 0usize;
    let mut isohedral = 0usize;
    let mut anisohedral = 0usize;
    let mut aperiodic = 0usize;
    let mut total = 0usize;

    while let Some(raw) = RawRecord::read(&mut reader)? {
        let record_type = match dispatch_grid!(raw.grid_code, classify, &raw) {
            Ok(record_type) => record_type,
            Err(err) => {
                log::error!("skipping record: {err:#}");
                continue;
            }
        };
        total += 1;
        match record_type {
            RecordType::Unknown => unknown += 1,
            RecordType::Hole => hole += 1,
            RecordType::Inconclusive => inconclusive += 1,
            RecordType::NonTiler { .. } => non_tiler += 1,
            RecordType::Isohedral { .. } => isohedral += 1,
            RecordType::Anisohedral { .. } => anisohedral += 1,
            RecordType::Aperiodic => aperiodic += 1,
        }
    }

    println!("{} {total}", "total:".bold());
    println!("{} {unknown}", "unknown:     ".dimmed());
    println!("{} {hole}", "hole:        ".yellow());
    println!("{} {inconclusive}", "inconclusive:".yellow());
    println!("{} {non_tiler}", "non-tiler:   ".red());
    println!("{} {isohedral}", "isohedral:   ".green());
    println!("{} {anisohedral}", "anisohedral: ".green());
    println!("{} {aperiodic}", "aperiodic:   ".green());

    Ok(())
}

fn classify<G: Grid>(raw: &RawRecord) -> anyhow::Result<RecordType> {
    let (_, record_type) = raw.bind::<G>()?;
    Ok(record_type)
}

fn run_surrounds(level: usize, no_reflections: bool, extremes: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let Some(raw) = RawRecord::read(&mut reader)? else {
        bail!("no record on standard input");
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_grid!(raw.grid_code, surrounds_for_grid, &raw, level, no_reflections, extremes, &mut out)
}

fn surrounds_for_grid<G: Grid>(
    raw: &RawRecord,
    level: usize,
    no_reflections: bool,
    extremes: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let (shape, _) = raw.bind::<G>()?;
    let mut solver = HeeschSolver::new(shape.clone());
    for _ in 0..level {
        solver.increase_level();
    }

    for t in solver.surrounds_at_level(level, no_reflections, extremes) {
        let mut placed = Shape::<G>::new();
        for &p in shape.cells() {
            placed.add(t * p);
        }
        placed.complete();
        write!(out, "{}", write_record(&placed, &RecordType::Unknown))?;
    }

    Ok(())
}
