mod intel_arc;

pub use intel_arc::{GpuSupport, initialize_intel_gpu};
