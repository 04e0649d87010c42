use crate::{error::GroupError, isomorphism::isomorphic, tables::CompletedTable};
use tracing::{debug, info};

/// Tables that are pairwise isomorphic. The first member is the
/// representative every later table was compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsomorphismClass {
    members: Vec<CompletedTable>,
}

impl IsomorphismClass {
    fn new(representative: CompletedTable) -> Self {
        Self {
            members: vec![representative],
        }
    }

    pub fn representative(&self) -> &CompletedTable {
        &self.members[0]
    }

    pub fn members(&self) -> &[CompletedTable] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn order(&self) -> usize {
        self.representative().order()
    }
}

/// Partitions `tables` into isomorphism classes. Each table joins the first
/// existing class whose representative it is isomorphic to, otherwise it
/// starts a new class, so classes come out in order of first appearance.
pub fn classify(
    tables: impl IntoIterator<Item = CompletedTable>,
) -> Result<Vec<IsomorphismClass>, GroupError> {
    let mut classes: Vec<IsomorphismClass> = vec![];

    'tables: for table in tables {
        for class in classes.iter_mut() {
            if class.order() == table.order() && isomorphic(class.representative(), &table)? {
                class.members.push(table);
                continue 'tables;
            }
        }
        debug!(class = classes.len(), "new isomorphism class");
        classes.push(IsomorphismClass::new(table));
    }

    info!(num_classes = classes.len(), "classification finished");
    Ok(classes)
}
