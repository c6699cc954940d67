pub mod facet_pane;
pub mod tracks_pane;
