use alsvin_ir::{Circuit, QubitId};
use alsvin_sim::{Counts, bloch_vector, probabilities, sample_all_qubits, simulate};

fn main() {
    let circuit = Circuit::bell();
    let state = simulate(&circuit).expect("bell circuit is valid");

    println!("Bell pair on {} qubits", state.num_qubits());
    for (k, amp) in state.amplitudes().iter().enumerate() {
        println!("  |{:02b}⟩  {:.4}{:+.4}i", k, amp.re, amp.im);
    }

    for q in 0..2_u32 {
        let b = bloch_vector(&state, QubitId(q)).unwrap();
        println!("q{q} Bloch vector: ({:.3}, {:.3}, {:.3})", b.x, b.y, b.z);
    }

    let probs = probabilities(&state);
    let counts = sample_all_qubits(&probs, 1024, 1337);
    let histogram = Counts::from_counts(&counts, state.num_qubits());

    println!("\n1024 shots, seed 1337:");
    let mut outcomes: Vec<_> = histogram.iter().collect();
    outcomes.sort();
    for (bits, count) in outcomes {
        println!("  {bits}: {count}");
    }
}
