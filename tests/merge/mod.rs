mod conflicting_merge;
mod merge_missing_heads;
