use thiserror::Error;

/// Failures during the one-time graphics setup phase. Once a context and
/// pipeline exist, the per-frame path has no error taxonomy; surface loss is
/// handled by skipping the frame.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
