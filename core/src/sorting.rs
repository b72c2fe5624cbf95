//! # Sort Traces
//!
//! Classic comparison sorts that record every elementary step they take, so
//! that a front end can animate the run or a test can replay it.
//!
//! A trace is made of four kinds of [`SortStep`]:
//! * **Compare**: two positions are compared.
//! * **Swap**: two positions exchange their values.
//! * **Set**: a position is overwritten with a value.
//! * **MarkSorted**: positions that have reached their final place.
//!
//! Only swaps and sets change the array; [`replay`] applies them to a copy of
//! the input and must end at the sorted output.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortStep {
    Compare(usize, usize),
    Swap(usize, usize),
    Set { index: usize, value: i64 },
    MarkSorted(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortTrace {
    pub algorithm: SortAlgorithm,
    pub steps: Vec<SortStep>,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Sorts `values` ascending in place and returns the steps taken.
    ///
    /// The trace always ends with a `MarkSorted` covering every position.
    pub fn trace(self, values: &mut [i64]) -> SortTrace {
        let mut rec = Recorder::default();
        let n: usize = values.len();

        match self {
            SortAlgorithm::Bubble => bubble(values, &mut rec),
            SortAlgorithm::Insertion => insertion(values, &mut rec),
            SortAlgorithm::Selection => selection(values, &mut rec),
            SortAlgorithm::Merge => merge_sort(values, 0, n, &mut rec),
            SortAlgorithm::Quick => quick_sort(values, 0, n, &mut rec),
        }
        rec.mark((0..n).collect());

        debug!("{} sort recorded {} steps for {n} values", self, rec.steps.len());

        SortTrace {
            algorithm: self,
            steps: rec.steps,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = SortAlgorithm::ALL.iter().map(|a| a.name()).collect();
                format!("unknown algorithm '{s}', expected one of: {}", names.join(", "))
            })
    }
}

impl SortTrace {
    pub fn compares(&self) -> usize {
        self.count(|step| matches!(step, SortStep::Compare(..)))
    }

    pub fn swaps(&self) -> usize {
        self.count(|step| matches!(step, SortStep::Swap(..)))
    }

    pub fn sets(&self) -> usize {
        self.count(|step| matches!(step, SortStep::Set { .. }))
    }

    fn count(&self, pred: impl Fn(&SortStep) -> bool) -> usize {
        self.steps.iter().filter(|step| pred(step)).count()
    }
}

/// Applies the swaps and sets of `steps` to a copy of `initial`.
pub fn replay(initial: &[i64], steps: &[SortStep]) -> Vec<i64> {
    let mut values: Vec<i64> = initial.to_vec();

    for step in steps {
        match *step {
            SortStep::Swap(i, j) => values.swap(i, j),
            SortStep::Set { index, value } => values[index] = value,
            SortStep::Compare(..) | SortStep::MarkSorted(_) => {}
        }
    }

    values
}

#[derive(Default)]
struct Recorder {
    steps: Vec<SortStep>,
}

impl Recorder {
    fn compare(&mut self, i: usize, j: usize) {
        self.steps.push(SortStep::Compare(i, j));
    }

    fn swap(&mut self, values: &mut [i64], i: usize, j: usize) {
        self.steps.push(SortStep::Swap(i, j));
        values.swap(i, j);
    }

    fn set(&mut self, values: &mut [i64], index: usize, value: i64) {
        self.steps.push(SortStep::Set { index, value });
        values[index] = value;
    }

    fn mark(&mut self, indices: Vec<usize>) {
        self.steps.push(SortStep::MarkSorted(indices));
    }
}

fn bubble(a: &mut [i64], rec: &mut Recorder) {
    let n: usize = a.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            rec.compare(j, j + 1);
            if a[j] > a[j + 1] {
                rec.swap(a, j, j + 1);
            }
        }
        rec.mark(vec![n - i - 1]);
    }
}

fn insertion(a: &mut [i64], rec: &mut Recorder) {
    for i in 1..a.len() {
        let key: i64 = a[i];
        // `hole` is the slot the key would land in right now.
        let mut hole: usize = i;

        rec.compare(hole - 1, i);
        while hole > 0 && a[hole - 1] > key {
            let shifted: i64 = a[hole - 1];
            rec.set(a, hole, shifted);
            hole -= 1;
            if hole > 0 {
                rec.compare(hole - 1, i);
            }
        }
        rec.set(a, hole, key);
    }
}

fn selection(a: &mut [i64], rec: &mut Recorder) {
    let n: usize = a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx: usize = i;
        for j in i + 1..n {
            rec.compare(min_idx, j);
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            rec.swap(a, i, min_idx);
        }
        rec.mark(vec![i]);
    }
}

/// Top-down merge sort over `a[lo..hi]`.
fn merge_sort(a: &mut [i64], lo: usize, hi: usize, rec: &mut Recorder) {
    if hi - lo <= 1 {
        return;
    }
    // Left half is the larger one for odd lengths.
    let mid: usize = lo + (hi - lo + 1) / 2;
    merge_sort(a, lo, mid, rec);
    merge_sort(a, mid, hi, rec);

    let left: Vec<i64> = a[lo..mid].to_vec();
    let right: Vec<i64> = a[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        rec.compare(lo + i, mid + j);
        if left[i] <= right[j] {
            rec.set(a, k, left[i]);
            i += 1;
        } else {
            rec.set(a, k, right[j]);
            j += 1;
        }
        k += 1;
    }
    for &value in left[i..].iter().chain(&right[j..]) {
        rec.set(a, k, value);
        k += 1;
    }
}

/// Quick sort over `a[lo..hi]` with a Lomuto partition around the last element.
fn quick_sort(a: &mut [i64], lo: usize, hi: usize, rec: &mut Recorder) {
    if hi - lo <= 1 {
        return;
    }
    let p: usize = partition(a, lo, hi - 1, rec);
    quick_sort(a, lo, p, rec);
    quick_sort(a, p + 1, hi, rec);
}

fn partition(a: &mut [i64], low: usize, high: usize, rec: &mut Recorder) -> usize {
    let pivot: i64 = a[high];
    let mut store: usize = low;

    for j in low..high {
        rec.compare(j, high);
        if a[j] <= pivot {
            rec.swap(a, store, j);
            store += 1;
        }
    }
    rec.swap(a, store, high);

    store
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
