// Application layer: turns planner results into terminal output.

pub mod report;
