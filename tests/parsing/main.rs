mod practices;
mod samples;
