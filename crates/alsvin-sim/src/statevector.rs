//! Statevector buffer and in-place gate kernels.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use alsvin_ir::{Gate, QubitId};

use crate::error::{SimError, SimResult};

/// Hard cap on the qubit count.
///
/// The buffer holds `2^n` complex amplitudes (two doubles each), so memory
/// scales as `2^(n+4)` bytes: 16 MiB at the cap. Beyond it the engine no
/// longer guarantees success.
pub const MAX_QUBITS: usize = 20;

/// A statevector representing a pure quantum state.
///
/// The buffer is a dense `Vec<Complex64>` of `2^n` amplitudes indexed by
/// basis integer, where qubit `q` occupies bit `n-1-q` (q0 is the MSB).
/// Gate kernels mutate the buffer in place and never allocate; the gate
/// catalogue is unitary by construction, so the norm invariant
/// `Σ|amp|² = 1` holds up to floating-point drift without renormalization.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidQubitCount`] unless `1 ≤ num_qubits ≤ 20`.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits < 1 || num_qubits > MAX_QUBITS {
            return Err(SimError::InvalidQubitCount { got: num_qubits });
        }
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state: `2^n`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the amplitudes, indexed by basis integer.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Sum of `|amp|²` over the whole buffer.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Pair-iteration mask for `qubit`: `1 << (n-1-q)`.
    ///
    /// This single definition encodes the q0-is-MSB convention; every
    /// kernel and observable derives its masks from it.
    pub(crate) fn mask(&self, qubit: QubitId) -> SimResult<usize> {
        let q = qubit.0 as usize;
        if q >= self.num_qubits {
            return Err(SimError::InvalidQubitIndex {
                qubit,
                n_qubits: self.num_qubits,
            });
        }
        Ok(1 << (self.num_qubits - 1 - q))
    }

    // =========================================================================
    // Generic single-qubit kernel
    // =========================================================================

    /// Apply an arbitrary 2×2 unitary `m` to `target`.
    ///
    /// Visits every basis pair `(i, j = i | mask)` with the target bit
    /// clear exactly once and writes back simultaneously: both new values
    /// are computed from the old pair before either slot is overwritten.
    fn apply_one_qubit(&mut self, target: QubitId, m: [[Complex64; 2]; 2]) -> SimResult<()> {
        let mask = self.mask(target)?;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply a Hadamard gate.
    pub fn apply_h(&mut self, target: QubitId) -> SimResult<()> {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        self.apply_one_qubit(target, [[s, s], [s, -s]])
    }

    /// Apply a Pauli-X gate.
    pub fn apply_x(&mut self, target: QubitId) -> SimResult<()> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        self.apply_one_qubit(target, [[zero, one], [one, zero]])
    }

    /// Apply a Pauli-Y gate.
    pub fn apply_y(&mut self, target: QubitId) -> SimResult<()> {
        let zero = Complex64::new(0.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        self.apply_one_qubit(target, [[zero, -i], [i, zero]])
    }

    /// Apply a Pauli-Z gate.
    pub fn apply_z(&mut self, target: QubitId) -> SimResult<()> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        self.apply_one_qubit(target, [[one, zero], [zero, -one]])
    }

    /// Apply an S gate (√Z).
    pub fn apply_s(&mut self, target: QubitId) -> SimResult<()> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        self.apply_one_qubit(target, [[one, zero], [zero, i]])
    }

    /// Apply a T gate (⁴√Z).
    pub fn apply_t(&mut self, target: QubitId) -> SimResult<()> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let phase = Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        self.apply_one_qubit(target, [[one, zero], [zero, phase]])
    }

    /// Apply an Rx rotation by `theta` radians.
    pub fn apply_rx(&mut self, target: QubitId, theta: f64) -> SimResult<()> {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        self.apply_one_qubit(target, [[c, neg_i_s], [neg_i_s, c]])
    }

    /// Apply an Ry rotation by `theta` radians.
    pub fn apply_ry(&mut self, target: QubitId, theta: f64) -> SimResult<()> {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new((theta / 2.0).sin(), 0.0);
        self.apply_one_qubit(target, [[c, -s], [s, c]])
    }

    /// Apply an Rz rotation by `theta` radians.
    pub fn apply_rz(&mut self, target: QubitId, theta: f64) -> SimResult<()> {
        let zero = Complex64::new(0.0, 0.0);
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        self.apply_one_qubit(target, [[phase_0, zero], [zero, phase_1]])
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply a CNOT gate.
    ///
    /// For every basis index with the control bit set and the target bit
    /// clear, swaps the amplitude with its target-bit partner.
    pub fn apply_cnot(&mut self, control: QubitId, target: QubitId) -> SimResult<()> {
        let ctrl_mask = self.mask(control)?;
        let tgt_mask = self.mask(target)?;
        if control == target {
            return Err(SimError::InvalidGateArgs {
                gate: "cnot",
                qubit: control,
            });
        }
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
        Ok(())
    }

    /// Apply a CZ gate: negates amplitudes with both bits set.
    pub fn apply_cz(&mut self, control: QubitId, target: QubitId) -> SimResult<()> {
        let ctrl_mask = self.mask(control)?;
        let tgt_mask = self.mask(target)?;
        if control == target {
            return Err(SimError::InvalidGateArgs {
                gate: "cz",
                qubit: control,
            });
        }
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
        Ok(())
    }

    /// Apply a SWAP gate.
    ///
    /// `a == b` is the identity. Otherwise, for every basis index whose
    /// `a`- and `b`-bits differ, swaps with the index that has both bits
    /// flipped, visiting each pair once via `j > i`.
    pub fn apply_swap(&mut self, a: QubitId, b: QubitId) -> SimResult<()> {
        let mask_a = self.mask(a)?;
        let mask_b = self.mask(b)?;
        if a == b {
            return Ok(());
        }
        let pair_mask = mask_a | mask_b;
        for i in 0..self.amplitudes.len() {
            if (i & mask_a != 0) != (i & mask_b != 0) {
                let j = i ^ pair_mask;
                if j > i {
                    self.amplitudes.swap(i, j);
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply a gate operation to the statevector.
    ///
    /// `Measure` validates its target and applies the identity.
    pub fn apply_gate(&mut self, gate: &Gate) -> SimResult<()> {
        match *gate {
            Gate::H { target } => self.apply_h(target),
            Gate::X { target } => self.apply_x(target),
            Gate::Y { target } => self.apply_y(target),
            Gate::Z { target } => self.apply_z(target),
            Gate::S { target } => self.apply_s(target),
            Gate::T { target } => self.apply_t(target),
            Gate::Rx { target, theta } => self.apply_rx(target, theta),
            Gate::Ry { target, theta } => self.apply_ry(target, theta),
            Gate::Rz { target, theta } => self.apply_rz(target, theta),
            Gate::Cnot { control, target } => self.apply_cnot(control, target),
            Gate::Cz { control, target } => self.apply_cz(control, target),
            Gate::Swap { a, b } => self.apply_swap(a, b),
            Gate::Measure { target } => self.mask(target).map(|_| ()),
        }
    }
}
