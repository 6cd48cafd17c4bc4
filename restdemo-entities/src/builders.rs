pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, product_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.comment.username = username.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.comment = text.into();
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    username: "anonymous".into(),
                    comment: "".into(),
                },
            }
        }
    }
}

pub mod product_builder {

    use super::*;
    use crate::{id::*, product::*};

    #[derive(Debug)]
    pub struct ProductBuild {
        product: Product,
    }

    impl ProductBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.product.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.product.name = name.into();
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.product.price = price;
            self
        }
        pub fn on_sale(mut self, on_sale: bool) -> Self {
            self.product.on_sale = on_sale;
            self
        }
        pub fn categories(mut self, categories: Vec<impl Into<String>>) -> Self {
            self.product.categories = categories.into_iter().map(Into::into).collect();
            self
        }
        pub fn size(mut self, size: Size) -> Self {
            self.product.size = Some(size);
            self
        }
        pub fn finish(self) -> Product {
            self.product
        }
    }

    impl Builder for Product {
        type Build = ProductBuild;
        fn build() -> ProductBuild {
            ProductBuild {
                product: Product {
                    id: Id::new(),
                    name: "".into(),
                    price: 0.0,
                    on_sale: false,
                    categories: vec![],
                    qty: Quantity::default(),
                    size: None,
                },
            }
        }
    }
}
