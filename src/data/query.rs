//! Read-only queries over a roster file.
//!
//! Every query opens the file itself and scans it from the top; nothing is
//! cached between calls.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::filter::CohortFilter;
use super::loader::open_rows;
use super::model::{House, HouseRosters, Row, RowSummary};
use crate::error::{Result, RosterError};

/// Unique non-empty house labels, spelled as they appear in the file.
pub fn distinct_houses(path: &Path) -> Result<BTreeSet<String>> {
    let mut houses = BTreeSet::new();
    for row in open_rows(path)? {
        let row = row?;
        if !row.house.is_empty() {
            houses.insert(row.house);
        }
    }
    log::debug!("found {} distinct houses", houses.len());
    Ok(houses)
}

/// Full names of the students selected by `cohort`, sorted ascending.
pub fn students_by_cohort(path: &Path, cohort: &CohortFilter) -> Result<Vec<String>> {
    let mut students = Vec::new();
    for row in open_rows(path)? {
        let row = row?;
        if cohort.matches(&row) {
            students.push(row.full_name());
        }
    }
    students.sort();
    log::debug!("{} students in cohort {cohort}", students.len());
    Ok(students)
}

/// Seven sorted rosters: the five houses, then ghosts, then instructors.
pub fn rosters_by_house(path: &Path) -> Result<HouseRosters> {
    let mut rosters = HouseRosters::default();
    for row in open_rows(path)? {
        let row = row?;
        for group in row.groups() {
            rosters.push(group, row.full_name());
        }
    }
    rosters.sort();
    log::debug!("placed {} roster entries", rosters.total());
    Ok(rosters)
}

/// One summary per line, in file order.
pub fn all_rows(path: &Path) -> Result<Vec<RowSummary>> {
    open_rows(path)?
        .map(|row| row.map(|r| r.summary()))
        .collect()
}

/// Fifth field of the first row named `full_name`, or `None` if nobody
/// matches. Reading stops at the first match.
pub fn cohort_for(path: &Path, full_name: &str) -> Result<Option<String>> {
    for row in open_rows(path)? {
        let row = row?;
        if row.full_name() == full_name {
            return Ok(Some(row.cohort_or_flag));
        }
    }
    log::debug!("no row named {full_name:?}");
    Ok(None)
}

/// Last names carried by two or more rows, each reported once.
pub fn duplicated_last_names(path: &Path) -> Result<BTreeSet<String>> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in open_rows(path)? {
        *counts.entry(row?.last_name).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(name, _)| name)
        .collect())
}

/// Everyone else who shares both house and cohort with `full_name`.
///
/// Only the five houses are searched; ghosts, instructors and unaffiliated
/// people yield [`RosterError::PersonNotFound`]. A housed person whose fifth
/// field is a flag or empty yields [`RosterError::MissingCohort`].
pub fn housemates_of(path: &Path, full_name: &str) -> Result<BTreeSet<String>> {
    let rows = open_rows(path)?.collect::<Result<Vec<_>>>()?;

    let (house, person) = find_housed(&rows, full_name)
        .ok_or_else(|| RosterError::PersonNotFound(full_name.to_string()))?;
    let cohort = person
        .cohort()
        .ok_or_else(|| RosterError::MissingCohort(full_name.to_string()))?;
    log::debug!("{full_name} is in {house}, cohort {cohort}");

    Ok(rows
        .iter()
        .filter(|r| r.house_category() == Some(house) && r.cohort() == Some(cohort))
        .map(Row::full_name)
        .filter(|name| name != full_name)
        .collect())
}

/// Locate `full_name` by walking the houses in report order, then rows in
/// file order. Returns the first hit, so a name filed under two houses
/// resolves to the earlier house (Gryffindor before Slytherin), not the last.
fn find_housed<'a>(rows: &'a [Row], full_name: &str) -> Option<(House, &'a Row)> {
    House::ALL.into_iter().find_map(|house| {
        rows.iter()
            .find(|r| r.house_category() == Some(house) && r.full_name() == full_name)
            .map(|r| (house, r))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::model::Group;

    const ROSTER: &str = "\
Harry|Potter|Gryffindor|McGonagall|Fall 2015
Ron|Weasley|Gryffindor|McGonagall|Fall 2015
Hermione|Granger|Gryffindor|McGonagall|Fall 2015
Ginny|Weasley|Gryffindor|McGonagall|Spring 2016
Fred|Weasley|Dumbledore's Army|McGonagall|Winter 2016
Draco|Malfoy|slytherin|Snape|Fall 2015
Cho|Chang|Ravenclaw|Flitwick|Fall 2015
Luna|Lovegood|RAVENCLAW|Flitwick|Summer 2016
Hannah|Abbott|Hufflepuff|Sprout|Winter 2016
Colin|Creevey||Sprout|Spring 2016
Dennis|Creevey||Sprout|Spring 2016
Severus|Snape|Slytherin||I
Minerva|McGonagall|||I
Nearly|Headless Nick|Gryffindor||G
Moaning|Myrtle|||G
";

    fn roster(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn distinct_houses_skips_unaffiliated() {
        let file = roster(ROSTER);
        let houses = distinct_houses(file.path()).unwrap();
        assert!(!houses.contains(""));
        assert_eq!(
            houses,
            set(&[
                "Dumbledore's Army",
                "Gryffindor",
                "Hufflepuff",
                "RAVENCLAW",
                "Ravenclaw",
                "Slytherin",
                "slytherin",
            ])
        );
    }

    #[test]
    fn students_by_cohort_all_excludes_flags() {
        let file = roster(ROSTER);
        let students = students_by_cohort(file.path(), &CohortFilter::All).unwrap();
        assert_eq!(students.len(), 11);
        assert!(!students.contains(&"Severus Snape".to_string()));
        assert!(!students.contains(&"Moaning Myrtle".to_string()));
        let mut sorted = students.clone();
        sorted.sort();
        assert_eq!(students, sorted);
    }

    #[test]
    fn students_by_named_cohort() {
        let file = roster(ROSTER);
        let students = students_by_cohort(file.path(), &"Fall 2015".into()).unwrap();
        assert_eq!(
            students,
            vec![
                "Cho Chang",
                "Draco Malfoy",
                "Harry Potter",
                "Hermione Granger",
                "Ron Weasley",
            ]
        );
    }

    #[test]
    fn all_equals_union_of_real_cohorts() {
        let file = roster(ROSTER);
        let all = students_by_cohort(file.path(), &CohortFilter::All).unwrap();

        let cohorts: BTreeSet<String> = all_rows(file.path())
            .unwrap()
            .into_iter()
            .map(|r| r.cohort_or_flag)
            .filter(|c| c != "I" && c != "G")
            .collect();
        let mut union = Vec::new();
        for cohort in cohorts {
            union.extend(students_by_cohort(file.path(), &CohortFilter::Named(cohort)).unwrap());
        }
        union.sort();
        assert_eq!(all, union);
    }

    #[test]
    fn rosters_by_house_fixed_order_and_orthogonal_flags() {
        let file = roster(ROSTER);
        let rosters = rosters_by_house(file.path()).unwrap();
        let lists = rosters.clone().into_lists();
        assert_eq!(lists.len(), 7);

        assert_eq!(lists[0], vec!["Fred Weasley"]);
        assert_eq!(
            lists[1],
            vec![
                "Ginny Weasley",
                "Harry Potter",
                "Hermione Granger",
                "Nearly Headless Nick",
                "Ron Weasley",
            ]
        );
        assert_eq!(lists[2], vec!["Hannah Abbott"]);
        assert_eq!(lists[3], vec!["Cho Chang", "Luna Lovegood"]);
        assert_eq!(lists[4], vec!["Draco Malfoy", "Severus Snape"]);
        assert_eq!(lists[5], vec!["Moaning Myrtle", "Nearly Headless Nick"]);
        assert_eq!(lists[6], vec!["Minerva McGonagall", "Severus Snape"]);

        assert_eq!(rosters.get(Group::Ghosts).len(), 2);
        // 13 classified rows, two of which sit in both a house and a flag group.
        assert_eq!(rosters.total(), 15);
    }

    #[test]
    fn all_rows_keeps_file_order() {
        let file = roster(ROSTER);
        let rows = all_rows(file.path()).unwrap();
        assert_eq!(rows.len(), ROSTER.lines().count());
        assert_eq!(
            rows[0].clone().into_tuple(),
            (
                "Harry Potter".to_string(),
                "Gryffindor".to_string(),
                "McGonagall".to_string(),
                "Fall 2015".to_string(),
            )
        );
        assert_eq!(rows.last().unwrap().full_name, "Moaning Myrtle");
    }

    #[test]
    fn cohort_for_known_and_unknown() {
        let file = roster(ROSTER);
        assert_eq!(
            cohort_for(file.path(), "Hannah Abbott").unwrap(),
            Some("Winter 2016".to_string())
        );
        assert_eq!(
            cohort_for(file.path(), "Severus Snape").unwrap(),
            Some("I".to_string())
        );
        assert_eq!(cohort_for(file.path(), "nonexistent name").unwrap(), None);
    }

    #[test]
    fn cohort_for_stops_at_first_match() {
        let file = roster("Harry|Potter|Gryffindor|McGonagall|Fall 2015\nnot a roster line\n");
        assert_eq!(
            cohort_for(file.path(), "Harry Potter").unwrap(),
            Some("Fall 2015".to_string())
        );
        assert!(cohort_for(file.path(), "Ron Weasley").is_err());
    }

    #[test]
    fn duplicated_last_names_counts_triples_once() {
        let file = roster(ROSTER);
        let dupes = duplicated_last_names(file.path()).unwrap();
        assert_eq!(dupes, set(&["Creevey", "Weasley"]));
    }

    #[test]
    fn unique_last_names_are_never_reported() {
        let file = roster("Harry|Potter|Gryffindor|McGonagall|Fall 2015\n");
        assert!(duplicated_last_names(file.path()).unwrap().is_empty());
    }

    #[test]
    fn housemates_share_house_and_cohort() {
        let file = roster(
            "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\
             Ron|Weasley|Gryffindor|McGonagall|Fall 2015\n\
             Hermione|Granger|Gryffindor|McGonagall|Fall 2015\n",
        );
        let mates = housemates_of(file.path(), "Harry Potter").unwrap();
        assert_eq!(mates, set(&["Ron Weasley", "Hermione Granger"]));
    }

    #[test]
    fn housemates_exclude_other_cohorts_and_self() {
        let file = roster(ROSTER);
        let mates = housemates_of(file.path(), "Hermione Granger").unwrap();
        assert_eq!(mates, set(&["Harry Potter", "Ron Weasley"]));
        assert!(!mates.contains("Hermione Granger"));

        let mates = housemates_of(file.path(), "Draco Malfoy").unwrap();
        assert!(mates.is_empty());
    }

    #[test]
    fn housemates_of_unhoused_person_fails() {
        let file = roster(ROSTER);
        for name in ["Colin Creevey", "Moaning Myrtle", "Balloonicorn"] {
            let err = housemates_of(file.path(), name).unwrap_err();
            assert!(
                matches!(err, RosterError::PersonNotFound(ref n) if n == name),
                "{name}: {err:?}"
            );
        }
    }

    #[test]
    fn housemates_of_flagged_person_has_no_cohort() {
        let file = roster(ROSTER);
        let err = housemates_of(file.path(), "Severus Snape").unwrap_err();
        assert!(matches!(err, RosterError::MissingCohort(_)));
    }

    #[test]
    fn housemates_of_person_with_empty_cohort_fails() {
        let file = roster(
            "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\
             Dobby|Elf|Gryffindor|Dumbledore|\n",
        );
        let err = housemates_of(file.path(), "Dobby Elf").unwrap_err();
        assert!(matches!(err, RosterError::MissingCohort(ref n) if n == "Dobby Elf"));
    }

    #[test]
    fn housemates_match_house_ignoring_case() {
        let file = roster(
            "Draco|Malfoy|slytherin|Snape|Fall 2015\n\
             Pansy|Parkinson|Slytherin|Snape|Fall 2015\n\
             Gregory|Goyle|SLYTHERIN|Snape|Winter 2016\n\
             Cho|Chang|Ravenclaw|Flitwick|Fall 2015\n",
        );
        let mates = housemates_of(file.path(), "Draco Malfoy").unwrap();
        assert_eq!(mates, set(&["Pansy Parkinson"]));
    }

    #[test]
    fn housemates_of_name_in_two_houses_uses_earlier_house() {
        let file = roster(
            "Tom|Riddle|Slytherin|Slughorn|Fall 2015\n\
             Tom|Riddle|Gryffindor|McGonagall|Fall 2015\n\
             Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\
             Draco|Malfoy|Slytherin|Snape|Fall 2015\n",
        );
        let mates = housemates_of(file.path(), "Tom Riddle").unwrap();
        assert_eq!(mates, set(&["Harry Potter"]));
    }

    #[test]
    fn blank_line_aborts_query() {
        let file = roster("Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\nRon|Weasley|Gryffindor|McGonagall|Fall 2015\n");
        assert!(matches!(
            all_rows(file.path()),
            Err(RosterError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn queries_propagate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("cohort_data.txt");
        assert!(matches!(distinct_houses(&missing), Err(RosterError::Io { .. })));
        assert!(matches!(cohort_for(&missing, "Harry Potter"), Err(RosterError::Io { .. })));
        assert!(matches!(housemates_of(&missing, "Harry Potter"), Err(RosterError::Io { .. })));
    }
}
