//! Fixed class label set
//!
//! Index order is the head-to-label mapping of the exported network and
//! must not be reordered without re-exporting the artifact.

/// Number of output classes in the network head
pub const NUM_CLASSES: usize = 8;

/// Class labels, indexed by network output position
pub const CLASS_LABELS: [&str; NUM_CLASSES] = [
    "Healthy Panel",
    "Microcracks",
    "Hot Spots",
    "Snail Trails",
    "Cell Breakage",
    "Delamination",
    "Bypass Diode Failure",
    "PID (Potential Induced Degradation)",
];
