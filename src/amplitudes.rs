use std::{ fs, io::{ self, Write }, path::PathBuf };
use grover_sim::{ config::GroverConfig, evolve::Evolution };
use itertools::Itertools;

const N: usize = 4; // number of qubits
const STEPS: usize = 40;
const WINNER: usize = 0b1001;

fn main() -> io::Result<()> {
    let cfg = GroverConfig::new(N, STEPS, WINNER)
        .expect("invalid Grover parameters");

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut out = fs::File::create(outdir.join("amplitudes.csv"))?;

    let labels = (0..cfg.size()).map(|k| cfg.basis_label(k)).format(",");
    writeln!(out, "t,{}", labels)?;
    for step in Evolution::new(&cfg) {
        writeln!(out, "{},{}", step.t, step.amplitudes.iter().format(","))?;
    }

    println!(
        "wrote {} amplitude rows over {} basis states",
        STEPS + 1,
        cfg.size(),
    );
    Ok(())
}
