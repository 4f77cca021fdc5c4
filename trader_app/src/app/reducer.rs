use super::event::*;
use super::state::*;

pub fn reduce(state: &mut AppState, ev: AppEvent) -> bool {
    match ev {
        AppEvent::Ui(u) => reduce_ui(state, u),
    }
}

fn reduce_ui(state: &mut AppState, ev: UiEvent) -> bool {
    match ev {
        UiEvent::TraderSelected { name } => {
            let Some(entry) = state.trader(&name) else {
                tracing::warn!(trader = %name, "selected trader is not on the roster");
                return false;
            };
            match entry.route {
                TraderRoute::Screen(target) => show(state, target),
                TraderRoute::UnderConstruction => {
                    announce_placeholder(state, entry.name);
                    false
                }
            }
        }
        UiEvent::BackToHome => show(state, Screen::Home),
        UiEvent::ConnectBrokerage => {
            tracing::debug!("connect brokerage clicked; no brokerage is wired up");
            false
        }
    }
}

fn show(state: &mut AppState, target: Screen) -> bool {
    if state.screen == target {
        return false;
    }
    tracing::debug!(from = state.screen.as_str(), to = target.as_str(), "screen change");
    state.screen = target;
    true
}

fn announce_placeholder(state: &mut AppState, name: &str) {
    let notice = format!("{name} screen is under construction!");
    println!("{notice}");
    tracing::info!(trader = name, "{notice}");
    state.notice_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(state: &mut AppState, name: &str) -> bool {
        reduce(
            state,
            AppEvent::Ui(UiEvent::TraderSelected { name: name.to_string() }),
        )
    }

    fn back(state: &mut AppState) -> bool {
        reduce(state, AppEvent::Ui(UiEvent::BackToHome))
    }

    #[test]
    fn cycap_opens_trade_detail() {
        let mut state = AppState::default();
        assert!(select(&mut state, "CyCap"));
        assert_eq!(state.screen, Screen::TradeDetail);

        // already there: still visible, nothing to repaint
        assert!(!select(&mut state, "CyCap"));
        assert_eq!(state.screen, Screen::TradeDetail);
    }

    #[test]
    fn back_returns_home() {
        let mut state = AppState::default();
        select(&mut state, "CyCap");
        assert!(back(&mut state));
        assert_eq!(state.screen, Screen::Home);

        assert!(!back(&mut state));
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn placeholder_traders_leave_screen_alone() {
        for start in [Screen::Home, Screen::TradeDetail] {
            let mut state = AppState { screen: start, ..AppState::default() };
            assert!(!select(&mut state, "Trader2"));
            assert!(!select(&mut state, "Trader3"));
            assert_eq!(state.screen, start);
        }
    }

    #[test]
    fn placeholder_counts_notices() {
        let mut state = AppState::default();
        select(&mut state, "Trader2");
        select(&mut state, "Trader3");
        select(&mut state, "Trader2");
        assert_eq!(state.notice_count, 3);
    }

    #[test]
    fn unknown_trader_is_ignored() {
        let mut state = AppState::default();
        assert!(!select(&mut state, "Nobody"));
        assert!(!select(&mut state, ""));
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.notice_count, 0);
    }

    #[test]
    fn connect_is_inert() {
        let mut state = AppState::default();
        select(&mut state, "CyCap");
        assert!(!reduce(&mut state, AppEvent::Ui(UiEvent::ConnectBrokerage)));
        assert_eq!(state.screen, Screen::TradeDetail);
    }

    #[test]
    fn trade_list_is_stable_across_visits() {
        let mut state = AppState::default();
        for _ in 0..5 {
            select(&mut state, "CyCap");
            assert_eq!(state.recent_trades, RECENT_TRADES);
            reduce(&mut state, AppEvent::Ui(UiEvent::ConnectBrokerage));
            select(&mut state, "Trader2");
            back(&mut state);
        }
        assert_eq!(state.recent_trades, RECENT_TRADES);
    }
}
