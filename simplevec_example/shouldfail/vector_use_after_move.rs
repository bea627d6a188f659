use simplevec::prelude::*;

fn main() {
    let v = vector![1, 2, 3];
    let w = v;
    println!("{}", v.len());
    drop(w);
}
