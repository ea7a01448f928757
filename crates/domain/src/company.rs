use crate::shared::entity::{Entity, ID};

/// A registered company. The `cnpj` field keeps whatever form the source
/// delivered (punctuated or not); validation and filtering always compare on
/// the digit-only form, see [`crate::cnpj`].
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: ID,
    pub name: String,
    pub cnpj: String,
    pub email: String,
}

impl Company {
    pub fn new<T: Into<String>>(id: ID, name: T, cnpj: T, email: T) -> Self {
        Self {
            id,
            name: name.into(),
            cnpj: cnpj.into(),
            email: email.into(),
        }
    }
}

impl Entity<ID> for Company {
    fn id(&self) -> ID {
        self.id
    }
}
