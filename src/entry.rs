/// A key-value pair stored in a tree node.
#[derive(Debug)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}
