/// Dashboard aggregate over a set of timesheet entries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Totals {
    pub hours: f64,
    pub gross: f64,
    pub net: f64,
    pub cpf: f64,
}
