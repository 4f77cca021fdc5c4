/// Which full-window view is showing. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    TradeDetail,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::TradeDetail => "trade-detail",
        }
    }
}

/// What a trader button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraderRoute {
    Screen(Screen),
    UnderConstruction,
}

#[derive(Debug, Clone, Copy)]
pub struct TraderEntry {
    pub name: &'static str,
    pub route: TraderRoute,
}

/// Home screen buttons, top to bottom.
pub const TRADERS: [TraderEntry; 3] = [
    TraderEntry {
        name: "CyCap",
        route: TraderRoute::Screen(Screen::TradeDetail),
    },
    TraderEntry {
        name: "Trader2",
        route: TraderRoute::UnderConstruction,
    },
    TraderEntry {
        name: "Trader3",
        route: TraderRoute::UnderConstruction,
    },
];

/// CyCap recent trades, shown verbatim.
pub const RECENT_TRADES: [&str; 4] = [
    "Bought AAPL @ $150.23",
    "Sold TSLA @ $703.12",
    "Bought GME @ $24.50",
    "Bought AMZN @ $123.67",
];

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub recent_trades: Vec<String>,

    // placeholder notices printed so far; never drives what is visible
    pub notice_count: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            recent_trades: RECENT_TRADES.iter().map(|t| t.to_string()).collect(),
            notice_count: 0,
        }
    }
}

impl AppState {
    pub fn trader(&self, name: &str) -> Option<&'static TraderEntry> {
        TRADERS.iter().find(|t| t.name == name)
    }

    pub fn traders(&self) -> &'static [TraderEntry] {
        &TRADERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_with_reference_trades() {
        let state = AppState::default();
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.recent_trades, RECENT_TRADES);
        assert_eq!(state.notice_count, 0);
    }

    #[test]
    fn roster_order_and_routes() {
        let names: Vec<_> = TRADERS.iter().map(|t| t.name).collect();
        assert_eq!(names, ["CyCap", "Trader2", "Trader3"]);

        let state = AppState::default();
        assert_eq!(
            state.trader("CyCap").map(|t| t.route),
            Some(TraderRoute::Screen(Screen::TradeDetail))
        );
        assert_eq!(
            state.trader("Trader3").map(|t| t.route),
            Some(TraderRoute::UnderConstruction)
        );
        assert!(state.trader("cycap").is_none());
    }
}
