//! Structural self-checks, used by the test suites.

use crate::tree::RbTree;

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Checks BST shape only: parent/child links agree, in-order values are
    /// non-decreasing under the comparator, and the node count matches
    /// `len`. This is the guarantee that survives `erase`.
    pub fn assert_ordered(&self) -> Result<(), String> {
        let arena = self.arena();
        if let Some(root) = self.root_index() {
            if arena.node(root).p.is_some() {
                return Err("root has a parent link".to_string());
            }
        }
        let mut count = 0usize;
        let mut stack = Vec::new();
        stack.extend(self.root_index());
        while let Some(index) = stack.pop() {
            count += 1;
            let node = arena.node(index);
            for child in [node.l, node.r].into_iter().flatten() {
                if arena.node(child).p != Some(index) {
                    return Err(format!("node {child} has a broken parent link"));
                }
                stack.push(child);
            }
        }
        if count != self.len() {
            return Err(format!("len is {} but {count} nodes reachable", self.len()));
        }
        let mut prev: Option<&T> = None;
        for value in self.iter() {
            if let Some(prev) = prev {
                if self.compare_values(prev, value) > 0 {
                    return Err("in-order traversal is not sorted".to_string());
                }
            }
            prev = Some(value);
        }
        Ok(())
    }

    /// Checks the full red-black contract on top of [`assert_ordered`]:
    /// black root, no red node with a red child, equal black height on
    /// every root-to-leaf path.
    ///
    /// [`assert_ordered`]: RbTree::assert_ordered
    pub fn assert_valid(&self) -> Result<(), String> {
        self.assert_ordered()?;
        let arena = self.arena();
        let Some(root) = self.root_index() else {
            return Ok(());
        };
        if arena.node(root).red {
            return Err("root is red".to_string());
        }
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            let node = arena.node(index);
            for child in [node.l, node.r].into_iter().flatten() {
                if node.red && arena.node(child).red {
                    return Err(format!("red node {index} has red child {child}"));
                }
                stack.push(child);
            }
        }
        self.black_height(Some(root)).map(|_| ())
    }

    fn black_height(&self, at: Option<u32>) -> Result<u32, String> {
        let Some(index) = at else {
            return Ok(1);
        };
        let node = self.arena().node(index);
        let left = self.black_height(node.l)?;
        let right = self.black_height(node.r)?;
        if left != right {
            return Err(format!(
                "black height mismatch at node {index}: {left} vs {right}"
            ));
        }
        Ok(left + u32::from(!node.red))
    }
}
