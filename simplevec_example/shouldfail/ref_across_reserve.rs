use simplevec::prelude::*;

fn main() {
    let mut v = vector![1, 2, 3];
    let inserted = v.insert(0, 0);
    v.reserve(100);
    drop(inserted);
}
