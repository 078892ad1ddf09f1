mod dataset;
mod import;
