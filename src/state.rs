use crate::data::model::{AdDataset, Channel};
use crate::data::view::{channel_view, ChannelView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until a file is loaded). Immutable once set.
    pub dataset: Option<AdDataset>,

    /// Currently selected advertising channel.
    pub channel: Channel,

    /// Derived view for the current (dataset, channel) pair.
    /// Recomputed whenever either changes; never patched in place.
    pub view: Option<ChannelView>,

    /// Whether the OLS trendline is drawn over the scatter.
    pub show_trendline: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            channel: Channel::default(),
            view: None,
            show_trendline: true,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table and derive the view for the current channel.
    pub fn set_dataset(&mut self, dataset: AdDataset) {
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh_view();
    }

    /// Switch the selected channel and rederive the view.
    pub fn set_channel(&mut self, channel: Channel) {
        if self.channel != channel {
            self.channel = channel;
            self.refresh_view();
        }
    }

    fn refresh_view(&mut self) {
        self.view = self
            .dataset
            .as_ref()
            .map(|ds| channel_view(ds, self.channel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn dataset() -> AdDataset {
        AdDataset::new(vec![
            Observation {
                tv: 100.0,
                radio: 20.0,
                newspaper: 30.0,
                sales: 10.0,
            },
            Observation {
                tv: 200.0,
                radio: 40.0,
                newspaper: 10.0,
                sales: 20.0,
            },
        ])
    }

    #[test]
    fn view_follows_dataset_and_channel() {
        let mut state = AppState::default();
        assert!(state.view.is_none());

        state.set_dataset(dataset());
        let view = state.view.as_ref().unwrap();
        assert_eq!(view.channel, Channel::Tv);
        assert_eq!(view.stats.mean_spend, 150.0);

        state.set_channel(Channel::Radio);
        let view = state.view.as_ref().unwrap();
        assert_eq!(view.channel, Channel::Radio);
        assert_eq!(view.stats.mean_spend, 30.0);
        // Sales column is channel-independent.
        assert_eq!(view.stats.mean_sales, 15.0);
    }

    #[test]
    fn reselecting_same_channel_keeps_view() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        let before = state.view.as_ref().unwrap().stats;
        state.set_channel(Channel::Tv);
        assert_eq!(state.view.as_ref().unwrap().stats, before);
    }
}
