use simplevec::ArrayPtr;

fn main() {
    let a: ArrayPtr<u8> = ArrayPtr::new(4);
    let b = a;
    drop(a);
    drop(b);
}
