#[derive(Clone)]
pub enum Msg {
    SetFullName(String),
    SetDate(String),
    SetTime(String),
    SetDestination(String),
    SetPurpose(String),
    SetInterests(String),
    Submit,
}
