#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Ui(UiEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    TraderSelected { name: String },
    BackToHome,
    ConnectBrokerage,
}
