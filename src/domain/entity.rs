use crate::domain::GeoPoint;

/// A geocoded business record returned by a local search. The identifier
/// combines the name and street address so two branches of the same chain
/// stay distinct. Descriptive fields are carried through to the export layer
/// untouched; only `coordinates` feeds the distance computation.
#[derive(Clone, Debug, PartialEq)]
pub struct LocatedEntity {
    identifier: String,
    name: String,
    phone_number: Option<String>,
    entity_type: String,
    formatted_address: String,
    coordinates: GeoPoint,
}

impl LocatedEntity {
    pub fn new(
        name: String,
        address_line: &str,
        phone_number: Option<String>,
        entity_type: String,
        formatted_address: String,
        coordinates: GeoPoint,
    ) -> Self {
        LocatedEntity {
            identifier: format!("{} - {}", name, address_line),
            name,
            phone_number,
            entity_type,
            formatted_address,
            coordinates,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn formatted_address(&self) -> &str {
        &self.formatted_address
    }

    pub fn coordinates(&self) -> &GeoPoint {
        &self.coordinates
    }
}

/// An insertion-ordered collection of entities keyed by identifier, produced
/// by one search fetch and never mutated afterwards.
///
/// Inserting a duplicate identifier replaces the earlier entry in place: the
/// new value wins but the original position is kept. Upstream occasionally
/// returns the same name and address twice and the last record is taken as
/// authoritative.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntitySet {
    entities: Vec<LocatedEntity>,
}

impl EntitySet {
    pub fn new() -> Self {
        EntitySet::default()
    }

    pub fn insert(&mut self, entity: LocatedEntity) {
        match self.entities.iter_mut().find(|e| e.identifier == entity.identifier) {
            Some(existing) => *existing = entity,
            None => self.entities.push(entity),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&LocatedEntity> {
        self.entities.iter().find(|e| e.identifier == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocatedEntity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<LocatedEntity> for EntitySet {
    fn from_iter<T: IntoIterator<Item = LocatedEntity>>(iter: T) -> Self {
        let mut set = EntitySet::new();
        for entity in iter {
            set.insert(entity);
        }
        set
    }
}
