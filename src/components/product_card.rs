use yew::prelude::*;

use crate::funnels::engine::Product;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component]
pub fn ProductCard(props: &ProductCardProps) -> Html {
    let product = &props.product;
    html! {
        <div class="product-card">
            <img class="product-card-image" src={product.image_url} alt={product.name} loading="lazy" />
            <h3 class="product-card-name">{product.name}</h3>
            <p class="product-card-description">{product.description}</p>
            <a
                class="product-card-link"
                href={product.link}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"Get it now"}
            </a>
            <style>
                {r#"
                .product-card {
                    background: rgba(30, 30, 30, 0.9);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 12px;
                    padding: 1rem;
                    max-width: 320px;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
                }
                .product-card-image {
                    width: 100%;
                    border-radius: 8px;
                    display: block;
                }
                .product-card-name {
                    color: white;
                    font-size: 1.1rem;
                    margin: 0.8rem 0 0.4rem;
                }
                .product-card-description {
                    color: #999;
                    font-size: 0.9rem;
                    line-height: 1.5;
                    margin: 0 0 1rem;
                }
                .product-card-link {
                    display: block;
                    text-align: center;
                    padding: 0.8rem 1.5rem;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    text-decoration: none;
                    font-weight: 500;
                    transition: all 0.3s ease;
                }
                .product-card-link:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                }
                "#}
            </style>
        </div>
    }
}
