use qudit_ops::{
    batch,
    channel,
    config::{ OpConfig, Precision, Tolerance },
    gate::{ Action, Channel, Gate, Operation, QuditOperation },
    linalg,
};
use tracing_subscriber::EnvFilter;

// build a handful of qutrit gates and noise channels in parallel and print
// what a hosting simulator would see for each
//
// set RUST_LOG=qudit_ops=trace to also see per-label resolution events
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("qudit_ops=debug"))
        )
        .init();

    let d: usize = 3;
    let p: f64 = 0.05;
    let tol = Tolerance::default();

    let gates = [
        Gate::shift(d, 1),
        Gate::phase(d, 1).dagger(),
        Gate::quad_phase(d, 1),
        Gate::mul(d, 2).inverse(),
        Gate::qft(d),
        Gate::y(d, 1, 2),
        Gate::sum(d, d),
        Gate::min(d, d),
        Gate::cshift(2, d),
    ];
    println!("gates (d = {}):", d);
    for (gate, mat) in gates.iter().zip(batch::unitaries(&gates)) {
        let mat = mat?;
        println!(
            "  {:<14} shape {:?}  unitary: {}",
            gate.label().to_string(),
            gate.shape().dims(),
            linalg::is_unitary(&mat, tol),
        );
    }

    let table = channel::single_table(p, d)?;
    println!("\none-register depolarizing table, p = {}:", p);
    for (label, prob) in table.iter() {
        println!("  {:<4} {:.6}", label.to_string(), prob);
    }
    println!("  total {:.6}", table.total_probability());

    let single = OpConfig::default().with_precision(Precision::Single);
    let ops: Vec<Operation> = vec![
        Channel::bit_flip(p, d).into(),
        Channel::depolarizing(p, d).into(),
        Channel::depolarizing_two(p, d).into(),
    ];
    println!("\nchannels (single precision):");
    for (op, action) in ops.iter().zip(batch::actions_with(&ops, &single)) {
        if let Action::Mixture(mix) = action? {
            println!(
                "  {:<10} {:>3} terms  normalized: {}",
                op.label().to_string(),
                mix.len(),
                mix.is_normalized(tol),
            );
        }
    }

    Ok(())
}
