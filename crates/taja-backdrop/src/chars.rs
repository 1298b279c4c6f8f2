//! Character constants for backdrop layers.

/// Characters used for the star field.
pub const STAR_CHARS: &[char] = &['.', '*', '+', '·', '✦', '✧'];

/// Characters used for drifting leaves.
pub const LEAF_CHARS: &[char] = &['❧', '❦', '❀', '✿', '⁕'];
