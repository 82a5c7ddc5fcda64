/// Customer resolved from the `cpf` header for the current request.
///
/// Inserted by the resolve-caller middleware; present for every route except
/// account creation and the health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContext {
    cpf: String,
}

impl CustomerContext {
    pub fn new(cpf: impl Into<String>) -> Self {
        Self { cpf: cpf.into() }
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }
}
