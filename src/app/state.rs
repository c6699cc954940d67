#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Artists,
    Albums,
    Tracks,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Artists => FocusedPane::Albums,
            FocusedPane::Albums => FocusedPane::Tracks,
            FocusedPane::Tracks => FocusedPane::Artists,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Artists => FocusedPane::Tracks,
            FocusedPane::Albums => FocusedPane::Artists,
            FocusedPane::Tracks => FocusedPane::Albums,
        }
    }
}
