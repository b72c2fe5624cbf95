use std::str::FromStr;

use labkit_core::list::DoublyLinkedList;

use crate::terminal::print;

/// One step applied to the list by the `list` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    Front(i64),
    Back(i64),
    PopFront,
    PopBack,
}

/// Insert 10 at the front, 20 at the back, 30 at the front, then remove one from each end.
const DEMO: [ListOp; 5] = [
    ListOp::Front(10),
    ListOp::Back(20),
    ListOp::Front(30),
    ListOp::PopFront,
    ListOp::PopBack,
];

impl FromStr for ListOp {
    type Err = String;

    /// Parses `front:<v>`, `back:<v>`, `pop-front` or `pop-back` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        match lower.as_str() {
            "pop-front" => return Ok(ListOp::PopFront),
            "pop-back" => return Ok(ListOp::PopBack),
            _ => {}
        }

        let Some((kind, value_str)) = lower.split_once(':') else {
            return Err(format!("invalid list operation: {s}"));
        };

        let value = value_str
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid value in '{s}': {e}"))?;

        match kind.trim() {
            "front" => Ok(ListOp::Front(value)),
            "back" => Ok(ListOp::Back(value)),
            other => Err(format!("unknown list operation '{other}' in '{s}'")),
        }
    }
}

impl ListOp {
    fn label(&self) -> String {
        match self {
            ListOp::Front(v) => format!("front {v}"),
            ListOp::Back(v) => format!("back {v}"),
            ListOp::PopFront => String::from("pop front"),
            ListOp::PopBack => String::from("pop back"),
        }
    }

    fn apply(&self, list: &mut DoublyLinkedList<i64>) {
        match *self {
            ListOp::Front(v) => list.insert_at_beginning(v),
            ListOp::Back(v) => list.insert_at_end(v),
            ListOp::PopFront => {
                list.delete_from_beginning();
            }
            ListOp::PopBack => {
                list.delete_from_end();
            }
        }
    }
}

pub fn list(ops: Vec<ListOp>) {
    let ops: Vec<ListOp> = if ops.is_empty() { DEMO.to_vec() } else { ops };
    let mut list: DoublyLinkedList<i64> = DoublyLinkedList::new();

    for op in &ops {
        op.apply(&mut list);
        print::aligned_line(&op.label(), print::sequence(list.iter()));
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_ops() {
        assert_eq!(ListOp::from_str("front:10"), Ok(ListOp::Front(10)));
        assert_eq!(ListOp::from_str(" BACK: -3 "), Ok(ListOp::Back(-3)));
        assert_eq!(ListOp::from_str("pop-front"), Ok(ListOp::PopFront));
        assert_eq!(ListOp::from_str("Pop-Back"), Ok(ListOp::PopBack));

        assert!(ListOp::from_str("front").is_err());
        assert!(ListOp::from_str("front:x").is_err());
        assert!(ListOp::from_str("middle:1").is_err());
    }

    #[test]
    fn test_demo_sequence() {
        let mut list: DoublyLinkedList<i64> = DoublyLinkedList::new();
        for op in &DEMO[..3] {
            op.apply(&mut list);
        }
        assert_eq!(list.display(), vec![30, 10, 20]);

        DEMO[3].apply(&mut list);
        assert_eq!(list.display(), vec![10, 20]);

        DEMO[4].apply(&mut list);
        assert_eq!(list.display(), vec![10]);
    }
}
