use simplevec::prelude::*;

fn main() {
    let mut v = vector![1, 2, 3];
    let iter = v.iter();
    v.erase(0);
    drop(iter);
}
