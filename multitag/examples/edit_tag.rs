use std::env::args;
use std::path::PathBuf;

use multitag::{SaveOptions, TagFile, TextField};

fn main() {
    let path = PathBuf::from(args().nth(1).unwrap());
    let mut file = TagFile::read_from_path(&path).unwrap();

    let title = args().skip(2).collect::<Vec<String>>().join(" ");

    file.set_text(TextField::Title, &title).unwrap();
    file.save(SaveOptions::default()).unwrap();
}
