use crate::ContainerNode;
use crate::LeafNode;
use crate::Node;

pub const SAMPLE_DOCUMENT: &str = r"
# Header 1

Paragraph 1

- Unorderlist Item 1
- Unorderlist Item 2

[Gmail](https://www.gmail.com)

![rick roll](https://i.imgur.com/aKaOqIh.gif)
";

pub const CODE_WITH_LANGUAGE: &str = r"``` Python
def find_all(self: str, pattern: str) -> Iterator[Tuple[int, str]]:

  # base case: the first search, if pattern is not found
  i = self.find(pattern)

  # loop: continue the search and return more matches
  while i != -1:
    yield i
    i = self.find(pattern, i + 1)```";

pub const KITCHEN_SINK: &str = r"# Title

A paragraph with **bold**, *italic* and `code`.

* One
- Two

1. First
2. Second

> Quoted
> > Nested

```
fn main() {

}
```

```let x = 1;```

[home](https://example.com)
";

pub fn text(value: &str) -> Node {
	Node::text(value)
}

pub fn element(tag: &str, children: Vec<Node>) -> Node {
	Node::container(tag, children)
}

pub fn quote(children: Vec<Node>) -> Node {
	element("blockquote", children)
}

pub fn list_item(value: &str) -> Node {
	element("li", vec![text(value)])
}

pub fn document(children: Vec<Node>) -> Node {
	element("div", children)
}

pub fn link(value: &str, href: &str) -> Node {
	ContainerNode::with_children("a", vec![text(value)])
		.with_attribute("href", href)
		.into()
}

pub fn image(alt: &str, src: &str) -> Node {
	LeafNode::new("")
		.with_tag("img")
		.with_attribute("src", src)
		.with_attribute("alt", alt)
		.into()
}
