//! Group operation test vectors.

/// Affine coordinates of `k·G` for `k = 1..=18` on
/// [`textbook_p17`](crate::named::textbook_p17). `19·G` is the identity.
pub const TEXTBOOK_MUL_VECTORS: &[(u8, u8)] = &[
    (5, 1),
    (6, 3),
    (10, 6),
    (3, 1),
    (9, 16),
    (16, 13),
    (0, 6),
    (13, 7),
    (7, 6),
    (7, 11),
    (13, 10),
    (0, 11),
    (16, 4),
    (9, 1),
    (3, 16),
    (10, 11),
    (6, 14),
    (5, 16),
];
