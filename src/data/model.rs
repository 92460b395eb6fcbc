use std::fmt;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// House – the five tracked affiliations
// ---------------------------------------------------------------------------

/// One of the five houses a person can belong to.
/// Declaration order is the order rosters are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum House {
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}

impl House {
    pub const ALL: [House; 5] = [
        House::DumbledoresArmy,
        House::Gryffindor,
        House::Hufflepuff,
        House::Ravenclaw,
        House::Slytherin,
    ];

    /// Canonical spelling as it appears in roster files.
    pub fn name(self) -> &'static str {
        match self {
            House::DumbledoresArmy => "Dumbledore's Army",
            House::Gryffindor => "Gryffindor",
            House::Hufflepuff => "Hufflepuff",
            House::Ravenclaw => "Ravenclaw",
            House::Slytherin => "Slytherin",
        }
    }

    /// Match a raw house field against the enumeration, ignoring case.
    /// Empty or unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<House> {
        let lower = label.to_lowercase();
        House::ALL
            .into_iter()
            .find(|h| h.name().to_lowercase() == lower)
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Group – houses plus the flag-derived rosters
// ---------------------------------------------------------------------------

/// A roster group: a house, or one of the synthetic flag groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    House(House),
    Ghosts,
    Instructors,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::House(House::DumbledoresArmy),
        Group::House(House::Gryffindor),
        Group::House(House::Hufflepuff),
        Group::House(House::Ravenclaw),
        Group::House(House::Slytherin),
        Group::Ghosts,
        Group::Instructors,
    ];

    /// Position of this group in [`Group::ALL`].
    pub fn index(self) -> usize {
        match self {
            Group::House(h) => h as usize,
            Group::Ghosts => 5,
            Group::Instructors => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Group::House(h) => h.name(),
            Group::Ghosts => "Ghosts",
            Group::Instructors => "Instructors",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Enrollment – interpretation of the fifth field
// ---------------------------------------------------------------------------

pub const INSTRUCTOR_FLAG: &str = "I";
pub const GHOST_FLAG: &str = "G";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment<'a> {
    /// A cohort label such as `Fall 2015`. May be empty.
    Cohort(&'a str),
    Instructor,
    Ghost,
}

impl<'a> Enrollment<'a> {
    pub fn parse(field: &'a str) -> Self {
        match field {
            INSTRUCTOR_FLAG => Enrollment::Instructor,
            GHOST_FLAG => Enrollment::Ghost,
            label => Enrollment::Cohort(label),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one line of the roster file
// ---------------------------------------------------------------------------

/// A single parsed roster line:
/// `first_name|last_name|house|advisor|cohort_or_flag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub first_name: String,
    pub last_name: String,
    /// Raw house label, possibly empty.
    pub house: String,
    pub advisor: String,
    /// Cohort label, or the `I` / `G` flag.
    pub cohort_or_flag: String,
}

impl Row {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn enrollment(&self) -> Enrollment<'_> {
        Enrollment::parse(&self.cohort_or_flag)
    }

    /// Cohort label when the fifth field is neither a flag nor empty.
    pub fn cohort(&self) -> Option<&str> {
        match self.enrollment() {
            Enrollment::Cohort(label) if !label.is_empty() => Some(label),
            _ => None,
        }
    }

    /// The tracked house this row belongs to, if any.
    pub fn house_category(&self) -> Option<House> {
        House::from_label(&self.house)
    }

    /// Every roster group this row counts toward. A row can sit in one
    /// house and, independently, in a flag group.
    pub fn groups(&self) -> impl Iterator<Item = Group> {
        let flag = match self.enrollment() {
            Enrollment::Ghost => Some(Group::Ghosts),
            Enrollment::Instructor => Some(Group::Instructors),
            Enrollment::Cohort(_) => None,
        };
        self.house_category().map(Group::House).into_iter().chain(flag)
    }

    pub fn summary(&self) -> RowSummary {
        RowSummary {
            full_name: self.full_name(),
            house: self.house.clone(),
            advisor: self.advisor.clone(),
            cohort_or_flag: self.cohort_or_flag.clone(),
        }
    }
}

/// The `(full_name, house, advisor, cohort_or_flag)` view of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSummary {
    pub full_name: String,
    pub house: String,
    pub advisor: String,
    pub cohort_or_flag: String,
}

impl RowSummary {
    pub fn into_tuple(self) -> (String, String, String, String) {
        (self.full_name, self.house, self.advisor, self.cohort_or_flag)
    }
}

// ---------------------------------------------------------------------------
// HouseRosters – the seven sorted name lists
// ---------------------------------------------------------------------------

/// Sorted full names for each of the seven groups, in [`Group::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseRosters {
    lists: [Vec<String>; 7],
}

impl HouseRosters {
    pub fn push(&mut self, group: Group, name: String) {
        self.lists[group.index()].push(name);
    }

    pub fn sort(&mut self) {
        for list in &mut self.lists {
            list.sort();
        }
    }

    pub fn get(&self, group: Group) -> &[String] {
        &self.lists[group.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Group, &[String])> {
        Group::ALL
            .into_iter()
            .zip(self.lists.iter().map(Vec::as_slice))
    }

    /// Total number of entries across all groups.
    pub fn total(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn into_lists(self) -> Vec<Vec<String>> {
        self.lists.into_iter().collect()
    }
}

impl Serialize for HouseRosters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.lists.len()))?;
        for (group, names) in self.iter() {
            map.serialize_entry(group.name(), names)?;
        }
        map.end()
    }
}
