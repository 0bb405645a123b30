pub mod merge;

pub use merge::{
    count_runs, group_adjacent, group_adjacent_by, merge_adjacent, MergeAdjacent,
    MergeAdjacentExt,
};
