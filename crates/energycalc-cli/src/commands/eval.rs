use crate::cli::EvalArgs;
use crate::error::Result;
use energycalc::core::formula::EnergyTerms;
use std::io::Write;
use tracing::info;

pub fn run(args: EvalArgs) -> Result<()> {
    let stdout = std::io::stdout();
    execute(&args, stdout.lock())
}

fn execute<W: Write>(args: &EvalArgs, mut out: W) -> Result<()> {
    let energy = energycalc::calculate(args.x)?;
    info!("Energy({}) = {}", args.x, energy);

    if args.breakdown {
        // `calculate` has already rejected negative input.
        let terms = EnergyTerms::of(args.x as u64);
        writeln!(out, "part1 (base)        = {}", terms.part1)?;
        writeln!(out, "part2 (spike)       = {}", terms.part2)?;
        writeln!(out, "part3 (oscillation) = {}", terms.part3)?;
        writeln!(out, "part4 (damped)      = {}", terms.part4)?;
        writeln!(out, "Energy({}) = {}", args.x, energy)?;
    } else {
        writeln!(out, "{}", energy)?;
    }
    Ok(())
}
