mod derived;
mod frames;
mod ingest;
