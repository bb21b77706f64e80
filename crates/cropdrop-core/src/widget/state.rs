use std::fmt;

use crate::crop::params::CropParams;
use crate::io::drop::SelectedFile;

/// Identifies one confirmed crop, so a late settlement can be told apart
/// from the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UploadTicket(pub(crate) u64);

impl UploadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// An open editor: the dropped file and the user's adjustments.
#[derive(Clone, Debug)]
pub struct CropSession {
    pub file: SelectedFile,
    pub params: CropParams,
}

impl CropSession {
    pub fn new(file: SelectedFile) -> Self {
        Self {
            file,
            params: CropParams::default(),
        }
    }
}

/// Widget mode.
#[derive(Clone, Debug, Default)]
pub enum Phase {
    /// Drop-accepting mode, before and after a crop cycle.
    #[default]
    Idle,
    /// Editor open.
    Cropping(CropSession),
    /// Editor open, upload in flight.
    Uploading {
        session: CropSession,
        ticket: UploadTicket,
    },
}

impl Phase {
    pub fn session(&self) -> Option<&CropSession> {
        match self {
            Self::Idle => None,
            Self::Cropping(session) | Self::Uploading { session, .. } => Some(session),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Cropping(_) => write!(f, "Cropping"),
            Self::Uploading { .. } => write!(f, "Uploading"),
        }
    }
}
