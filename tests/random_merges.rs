extern crate partition;

#[macro_use]
extern crate quickcheck;

use partition::{Partition, PartitionError};

// The initial length of the partition we'll test on.
const INITIAL_LEN: usize = 40;

// Out of every 100 commands, how many are finds and inserts; the rest
// are merges.
const FIND_PCT: u8 = 40;
const INSERT_PCT: u8 = 5;

quickcheck! {
    fn prop_partition_simulates_model(script: Vec<(u8, u8, u8)>) -> bool {
        let mut tester = Tester::new();
        for &raw in &script {
            if !tester.execute(Cmd::from(raw)) {
                return false;
            }
        }
        tester.check()
    }

    fn prop_find_compress_agrees_with_find(script: Vec<(u8, u8, u8)>) -> bool {
        let mut tester = Tester::new();
        for &raw in &script {
            tester.execute(Cmd::from(raw));
        }

        (0 .. tester.partition.len()).all(|e| {
            let root = tester.partition.find(e);
            root == tester.partition.find_compress(e) && root == tester.partition.find(e)
        }) && tester.check()
    }

    fn prop_out_of_range_is_rejected(script: Vec<(u8, u8, u8)>, extra: u8) -> bool {
        let mut tester = Tester::new();
        for &raw in &script {
            tester.execute(Cmd::from(raw));
        }

        let len = tester.partition.len();
        let bad = len + extra as usize;
        let before = tester.partition.clone();
        let expected = Err(PartitionError::OutOfRange { element: bad, len });

        tester.partition.find(bad) == expected
            && tester.partition.find_compress(bad) == expected
            && tester.partition.merge(0, bad).map(|_| ()) == expected.map(|_: usize| ())
            && tester.partition == before
    }
}

// We run the same commands on a `Partition` and on a naive model that
// stores a set id for every element, then check they agree.
struct Tester {
    partition: Partition<usize>,
    model:     Vec<usize>,
}

impl Tester {
    fn new() -> Self {
        Tester {
            partition: Partition::new(INITIAL_LEN),
            model:     (0 .. INITIAL_LEN).collect(),
        }
    }

    // Runs one command on both, returning whether the immediate results
    // agree.
    fn execute(&mut self, cmd: Cmd) -> bool {
        let len = self.model.len();

        match cmd {
            Cmd::Find(i) => {
                let i = i % len;
                let before = self.partition.find(i);
                before.is_ok() && before == self.partition.find(i)
            }

            Cmd::Insert(count) => {
                let sets = self.partition.number_of_sets();
                let old: Vec<_> = (0 .. len).map(|e| self.partition.find(e)).collect();

                if self.partition.insert(count).is_err() { return false; }
                let next_id = self.model.iter().max().map_or(0, |&m| m + 1);
                self.model.extend(next_id .. next_id + count);

                self.partition.number_of_elements() == len + count
                    && self.partition.number_of_sets() == sets + count
                    && (0 .. len).all(|e| self.partition.find(e) == old[e])
                    && (len .. len + count).all(|e| self.partition.find(e) == Ok(e))
            }

            Cmd::Merge(a, b) => {
                let a = a % len;
                let b = b % len;
                let sets = self.partition.number_of_sets();
                let distinct = self.model[a] != self.model[b];

                if distinct {
                    let (from, to) = (self.model[b], self.model[a]);
                    for id in &mut self.model {
                        if *id == from { *id = to; }
                    }
                }

                let merged = self.partition.merge(a, b);
                let expected_sets = if distinct { sets - 1 } else { sets };

                merged == Ok(distinct)
                    && self.partition.number_of_sets() == expected_sets
            }
        }
    }

    // Checks every whole-partition property against the model.
    fn check(&self) -> bool {
        let p = &self.partition;
        let len = self.model.len();

        if p.len() != len { return false; }

        for i in 0 .. len {
            for j in 0 .. len {
                let same = self.model[i] == self.model[j];
                if p.equiv(i, j) != Ok(same) {
                    return false;
                }
            }
        }

        let reps = p.representatives();
        let mut model_ids = self.model.clone();
        model_ids.sort();
        model_ids.dedup();

        let ascending = reps.windows(2).all(|w| w[0] < w[1]);
        let are_roots = reps.iter().all(|&r| p.find(r) == Ok(r));
        if !ascending || !are_roots
            || reps.len() != p.number_of_sets()
            || model_ids.len() != p.number_of_sets()
        {
            return false;
        }

        let rep_labels = p.representative_labeling();
        let dense = rep_labels.len() == reps.len()
            && reps.iter().enumerate().all(|(k, r)| rep_labels.get(r) == Some(&k));

        let labels = p.element_labeling();
        let in_range = labels.len() == len
            && labels.iter().all(|&l| l < p.number_of_sets());
        let consistent = (0 .. len).all(|e| {
            p.find(e).ok().and_then(|r| rep_labels.get(&r)) == Some(&labels[e])
        });

        dense && in_range && consistent
    }
}

// A command is a find, an insert or a merge.
#[derive(Clone, Copy, Debug)]
enum Cmd {
    Find(usize),
    Insert(usize),
    Merge(usize, usize),
}

impl From<(u8, u8, u8)> for Cmd {
    fn from((choice, x, y): (u8, u8, u8)) -> Self {
        let choice = choice % 100;
        if choice < FIND_PCT {
            Cmd::Find(x as usize)
        } else if choice < FIND_PCT + INSERT_PCT {
            Cmd::Insert(x as usize % 4)
        } else {
            Cmd::Merge(x as usize, y as usize)
        }
    }
}

#[test]
fn merges_chain_transitively() {
    let mut p = Partition::<u32>::new(10);
    for i in 0 .. 9 {
        p.merge(i, i + 1).unwrap();
    }

    assert_eq!(1, p.number_of_sets());
    assert_eq!(vec![0; 10], p.element_labeling());
    assert_eq!(p.representatives().len(), 1);
}

#[test]
fn reset_then_grow() {
    let mut p = Partition::<u16>::new(5);
    p.merge(0, 4).unwrap();
    p.reset(2);
    p.insert(3).unwrap();

    assert_eq!(5, p.number_of_elements());
    assert_eq!(5, p.number_of_sets());
    assert_eq!(vec![0, 1, 2, 3, 4], p.element_labeling());
}
