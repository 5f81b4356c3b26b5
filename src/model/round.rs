use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    discipline: String,
    number: u32,
    slug: String,
    excluded: bool,
}

impl Round {
    pub fn new(discipline: impl Into<String>, number: u32) -> Self {
        let discipline = discipline.into();
        let slug = round_slug(&discipline, number);
        Self {
            discipline,
            number,
            slug,
            excluded: false,
        }
    }

    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_excluded(&self) -> bool {
        self.excluded
    }
}

pub fn round_slug(discipline: &str, number: u32) -> String {
    format!("{discipline}-{number}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundsByDiscipline {
    groups: Vec<(String, Vec<Round>)>,
}

impl RoundsByDiscipline {
    pub fn group(rounds: &[Round]) -> Self {
        let mut groups: Vec<(String, Vec<Round>)> = Vec::new();
        for round in rounds {
            match groups.iter_mut().find(|(d, _)| d == round.discipline()) {
                Some((_, members)) => members.push(round.clone()),
                None => groups.push((round.discipline().to_string(), vec![round.clone()])),
            }
        }
        Self { groups }
    }

    pub fn disciplines(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(d, _)| d.as_str())
    }

    pub fn get(&self, discipline: &str) -> Option<&[Round]> {
        self.groups
            .iter()
            .find(|(d, _)| d == discipline)
            .map(|(_, rounds)| rounds.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Round])> {
        self.groups.iter().map(|(d, r)| (d.as_str(), r.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for RoundsByDiscipline {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (discipline, rounds) in &self.groups {
            map.serialize_entry(discipline, rounds)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/round.rs"]
mod tests;
