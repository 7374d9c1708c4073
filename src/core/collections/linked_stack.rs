use super::traits::Stack;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Stack built from singly linked nodes
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { head: None, size: 0 }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, item: T) {
        let node = Box::new(Node {
            value: item,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.size += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.size -= 1;
            node.value
        })
    }

    fn top(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long stacks don't overflow on recursive drop
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            list.entry(&node.value);
            cursor = node.next.as_deref();
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack = LinkedStack::new();
        for i in 0..100 {
            stack.push(i);
        }
        stack.clear();
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_deep_stack_drops() {
        let mut stack = LinkedStack::new();
        for i in 0..200_000 {
            stack.push(i);
        }
        drop(stack);
    }
}
