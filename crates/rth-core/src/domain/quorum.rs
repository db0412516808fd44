//! Tetrahedral quorum gate.
//!
//! Four is the minimum vertex count of a non-degenerate tetrahedron: the
//! geometric stand-in for requiring agreement from a set of parties that
//! cannot collude pairwise. Consensus computation must be rejected by the
//! calling layer below this count; the engine does not re-check it.

/// Minimum number of verifications before consensus may be computed.
pub const TETRAHEDRAL_QUORUM: usize = 4;

/// True iff `count` meets the tetrahedral quorum.
pub fn tetrahedral_quorum(count: usize) -> bool {
    count >= TETRAHEDRAL_QUORUM
}
