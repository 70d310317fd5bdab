use crate::types::Machine;

// Default embedded machines
const MACHINE_TEXTS: [&str; 3] = [
    include_str!("../machines/a-plus.csv"),
    include_str!("../machines/ends-with-a.csv"),
    include_str!("../machines/zero-n-one-n.csv"),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: Vec<Machine> = MACHINE_TEXTS
        .iter()
        .filter_map(|text| match crate::parser::parse(text) {
            Ok(machine) => Some(machine),
            Err(_) => {
                eprintln!("Failed to parse embedded machine");
                None
            }
        })
        .collect();
}

pub struct MachineCatalog;

impl MachineCatalog {
    /// Get the number of available machines
    pub fn count() -> usize {
        MACHINES.len()
    }

    /// List all machine names
    pub fn names() -> Vec<String> {
        MACHINES.iter().map(|machine| machine.name.clone()).collect()
    }

    /// Get a machine by its name
    pub fn get(name: &str) -> Option<&'static Machine> {
        MACHINES.iter().find(|machine| machine.name == name)
    }

    /// Get the original text of a machine by its index
    pub fn text(index: usize) -> Option<&'static str> {
        MACHINE_TEXTS.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Simulator;
    use crate::types::Verdict;

    fn accepts(machine: &Machine, input: &str) -> bool {
        matches!(
            Simulator::default().run(machine, input).unwrap().verdict,
            Verdict::Accepted { .. }
        )
    }

    #[test]
    fn test_all_embedded_machines_parse() {
        assert_eq!(MachineCatalog::count(), MACHINE_TEXTS.len());
    }

    #[test]
    fn test_machine_names() {
        let names = MachineCatalog::names();

        assert!(names.contains(&"A plus".to_string()));
        assert!(names.contains(&"Ends with a".to_string()));
        assert!(names.contains(&"Zero-n one-n".to_string()));
    }

    #[test]
    fn test_get_machine_by_name() {
        let machine = MachineCatalog::get("A plus");
        assert!(machine.is_some());
        assert_eq!(machine.unwrap().start_state, "q1");

        assert!(MachineCatalog::get("Nonexistent").is_none());
    }

    #[test]
    fn test_machine_texts_are_available() {
        assert!(MachineCatalog::text(0).is_some());
        assert!(MachineCatalog::text(MACHINE_TEXTS.len()).is_none());
    }

    #[test]
    fn test_a_plus_machine() {
        let machine = MachineCatalog::get("A plus").unwrap();

        assert!(accepts(machine, "a"));
        assert!(accepts(machine, "aaaa"));
        assert!(!accepts(machine, ""));
        assert!(!accepts(machine, "ab"));
        assert!(!accepts(machine, "b"));
    }

    #[test]
    fn test_ends_with_a_machine_guesses_the_final_symbol() {
        let machine = MachineCatalog::get("Ends with a").unwrap();

        assert!(accepts(machine, "a"));
        assert!(accepts(machine, "ba"));
        assert!(accepts(machine, "abba"));
        assert!(!accepts(machine, ""));
        assert!(!accepts(machine, "ab"));
        assert!(!accepts(machine, "b"));
    }

    #[test]
    fn test_ends_with_a_machine_branches() {
        let machine = MachineCatalog::get("Ends with a").unwrap();

        let result = Simulator::default().run(machine, "ba").unwrap();

        // Scanning the final 'a' forks: keep scanning, or guess it is last.
        assert_eq!(result.trace[2].len(), 2);
        assert_eq!(result.verdict, Verdict::Accepted { depth: 3 });
    }

    #[test]
    fn test_zero_n_one_n_machine() {
        let machine = MachineCatalog::get("Zero-n one-n").unwrap();

        assert!(accepts(machine, "01"));
        assert!(accepts(machine, "0011"));
        assert!(accepts(machine, "000111"));
        assert!(!accepts(machine, ""));
        assert!(!accepts(machine, "001"));
        assert!(!accepts(machine, "011"));
        assert!(!accepts(machine, "10"));
    }
}
