use crate::types::MessageId;
use crate::{Error, Label, Message};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Names one side of a train/test partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitName {
    Train,
    Test,
}

impl fmt::Display for SplitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitName::Train => write!(f, "train"),
            SplitName::Test => write!(f, "test"),
        }
    }
}

/// A disjoint, exhaustive partition of a corpus into TRAIN and TEST ids.
///
/// Both id lists are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSplit {
    pub train: Vec<MessageId>,
    pub test: Vec<MessageId>,
}

impl CorpusSplit {
    pub fn ids(&self, split_name: SplitName) -> &[MessageId] {
        match split_name {
            SplitName::Train => &self.train,
            SplitName::Test => &self.test,
        }
    }

    /// Selects the messages of one side of the split, in id order.
    pub fn select<'a>(&self, messages: &'a [Message], split_name: SplitName) -> Vec<&'a Message> {
        let ids: HashSet<MessageId> = self.ids(split_name).iter().copied().collect();

        messages
            .iter()
            .filter(|message| ids.contains(&message.id))
            .collect()
    }

    /// Convenience for `select` returning owned messages.
    pub fn select_owned(&self, messages: &[Message], split_name: SplitName) -> Vec<Message> {
        self.select(messages, split_name)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Seeded random partitioning of a corpus.
#[derive(Debug, Clone, Copy)]
pub struct CorpusSplitter {
    seed: u64,
    train_fraction: f64,
    stratify: bool,
}

impl CorpusSplitter {
    pub fn new(seed: u64, train_fraction: f64, stratify: bool) -> Result<Self, Error> {
        if !(train_fraction > 0.0 && train_fraction < 1.0) {
            return Err(Error::Config(format!(
                "split_fraction must be in (0, 1), got {}",
                train_fraction
            )));
        }

        Ok(Self {
            seed,
            train_fraction,
            stratify,
        })
    }

    /// Partitions the corpus. The same seed, fraction and corpus always produce the same
    /// split.
    ///
    /// When stratified, each label is shuffled and cut separately so both classes keep
    /// their corpus proportions in TRAIN.
    pub fn split(&self, messages: &[Message]) -> CorpusSplit {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let groups: Vec<Vec<MessageId>> = if self.stratify {
            [Label::Ham, Label::Spam]
                .iter()
                .map(|label| {
                    messages
                        .iter()
                        .filter(|message| message.label == *label)
                        .map(|message| message.id)
                        .collect()
                })
                .collect()
        } else {
            vec![messages.iter().map(|message| message.id).collect()]
        };

        let mut train = Vec::with_capacity(messages.len());
        let mut test = Vec::with_capacity(messages.len());

        for mut group in groups {
            group.shuffle(&mut rng);

            let train_len = self.train_len(group.len());
            let test_part = group.split_off(train_len);

            train.extend(group);
            test.extend(test_part);
        }

        train.sort_unstable();
        test.sort_unstable();

        debug!(
            "Split {} messages into {} train / {} test (seed {})",
            messages.len(),
            train.len(),
            test.len(),
            self.seed
        );

        CorpusSplit { train, test }
    }

    /// Rounds the train share to the nearest whole message, keeping at least one message
    /// on each side when the group has two or more.
    fn train_len(&self, group_len: usize) -> usize {
        if group_len < 2 {
            return group_len;
        }

        let rounded = (group_len as f64 * self.train_fraction).round() as usize;

        rounded.clamp(1, group_len - 1)
    }
}
