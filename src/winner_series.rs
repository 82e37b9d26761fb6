use std::{ fs, io::{ self, Write }, path::PathBuf };
use grover_sim::{
    config::GroverConfig,
    evolve::{ Evolution, optimal_steps },
};

const N: usize = 4; // number of qubits
const STEPS: usize = 40;
const WINNER: usize = 0b1001;

fn main() -> io::Result<()> {
    let cfg = GroverConfig::new(N, STEPS, WINNER)
        .expect("invalid Grover parameters");

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut out = fs::File::create(outdir.join("winner_series.csv"))?;

    writeln!(out, "t,winner,mirror")?;
    for step in Evolution::new(&cfg) {
        writeln!(out, "{},{},{}", step.t, step.winner, step.mirror)?;
    }

    println!(
        "marked state {} (mirror {}); optimal iteration count = {}",
        cfg.basis_label(cfg.winner()),
        cfg.basis_label(cfg.mirror()),
        optimal_steps(N),
    );
    Ok(())
}
