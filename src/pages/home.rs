use yew::prelude::*;
use yew_router::components::Link;

use crate::components::chat_widget::ChatWidget;
use crate::Route;

const FEATURED_PRODUCTS: [&str; 3] = ["Air Max", "Nike React", "Zoom Fly"];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let home_css = r#"
        .home-page {
            min-height: 100vh;
            background: #fff;
            color: #111827;
            font-family: 'Helvetica Neue', Arial, sans-serif;
            margin: 0;
        }
        .home-nav {
            position: absolute;
            top: 0;
            right: 0;
            z-index: 20;
            padding: 1.5rem 2rem;
        }
        .home-nav a {
            color: #111827;
            text-decoration: none;
            font-weight: 600;
        }
        .home-nav a:hover {
            text-decoration: underline;
        }
        .hero {
            position: relative;
            height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            background: #f3f4f6;
            overflow: hidden;
        }
        .hero img {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
            z-index: 0;
        }
        .hero-content {
            position: relative;
            z-index: 10;
            text-align: center;
        }
        .hero-content h1 {
            font-size: 3.75rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }
        .hero-content p {
            font-size: 1.25rem;
            margin-bottom: 2rem;
        }
        .hero-cta {
            background: #000;
            color: #fff;
            padding: 0.75rem 2rem;
            border-radius: 9999px;
            font-size: 1.125rem;
            text-decoration: none;
        }
        .hero-cta:hover {
            background: #1f2937;
        }
        .products-section {
            padding: 4rem 1rem;
            max-width: 72rem;
            margin: 0 auto;
        }
        .products-section h2 {
            font-size: 1.875rem;
            font-weight: 700;
            margin-bottom: 2rem;
            text-align: center;
        }
        .products-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
        }
        @media (max-width: 768px) {
            .products-grid {
                grid-template-columns: 1fr;
            }
        }
        .product-card {
            background: #f3f4f6;
            padding: 1.5rem;
            border-radius: 0.5rem;
        }
        .product-card .product-image {
            background: #fff;
            margin-bottom: 1rem;
            border-radius: 0.5rem;
            overflow: hidden;
        }
        .product-card img {
            width: 100%;
            display: block;
        }
        .product-card h3 {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 0.5rem;
        }
        .product-card p {
            color: #4b5563;
            margin-bottom: 1rem;
        }
        .product-card button {
            background: #000;
            color: #fff;
            border: none;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            cursor: pointer;
        }
        .product-card button:hover {
            background: #1f2937;
        }
        .innovation-section {
            background: #111827;
            color: #fff;
            padding: 4rem 1rem;
            text-align: center;
        }
        .innovation-section .inner {
            max-width: 56rem;
            margin: 0 auto;
        }
        .innovation-section h2 {
            font-size: 1.875rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }
        .innovation-section p {
            font-size: 1.25rem;
            margin-bottom: 2rem;
        }
        .innovation-section a {
            background: #fff;
            color: #000;
            padding: 0.75rem 2rem;
            border-radius: 9999px;
            font-size: 1.125rem;
            text-decoration: none;
        }
        .innovation-section a:hover {
            background: #e5e7eb;
        }
        .sustainability-section {
            padding: 4rem 1rem;
            max-width: 72rem;
            margin: 0 auto;
            display: flex;
            align-items: center;
            gap: 2rem;
        }
        @media (max-width: 768px) {
            .sustainability-section {
                flex-direction: column;
            }
        }
        .sustainability-section .column {
            flex: 1;
        }
        .sustainability-section img {
            width: 100%;
            border-radius: 0.5rem;
        }
        .sustainability-section h2 {
            font-size: 1.875rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }
        .sustainability-section p {
            font-size: 1.25rem;
            margin-bottom: 1.5rem;
        }
        .sustainability-section a {
            background: #000;
            color: #fff;
            padding: 0.5rem 1.5rem;
            border-radius: 9999px;
            text-decoration: none;
        }
        .sustainability-section a:hover {
            background: #1f2937;
        }
    "#;

    html! {
        <main class="home-page">
            <style>{ home_css }</style>
            <nav class="home-nav">
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
            </nav>

            <section class="hero">
                <img src="/assets/hero-image.jpg" alt="Nike Hero" />
                <div class="hero-content">
                    <h1>{"Just Do It"}</h1>
                    <p>{"Innovate. Perform. Succeed."}</p>
                    <a href="#products" class="hero-cta">{"Shop Now"}</a>
                </div>
            </section>

            <section id="products" class="products-section">
                <h2>{"Featured Products"}</h2>
                <div class="products-grid">
                    { for FEATURED_PRODUCTS.iter().map(|product| {
                        let image = format!(
                            "/assets/{}.jpg",
                            product.to_lowercase().replace(' ', "-")
                        );
                        html! {
                            <div class="product-card">
                                <div class="product-image">
                                    <img src={image} alt={*product} />
                                </div>
                                <h3>{ product }</h3>
                                <p>{"Experience ultimate comfort and style."}</p>
                                <button>{"View Details"}</button>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="innovation-section">
                <div class="inner">
                    <h2>{"Innovative Technology"}</h2>
                    <p>
                        {"Our cutting-edge designs and materials push the boundaries of \
                          athletic performance."}
                    </p>
                    <a href="#">{"Learn More"}</a>
                </div>
            </section>

            <section class="sustainability-section">
                <div class="column">
                    <img src="/assets/sustainability.jpg" alt="Sustainability" />
                </div>
                <div class="column">
                    <h2>{"Committed to Sustainability"}</h2>
                    <p>
                        {"We're dedicated to reducing our environmental impact and creating \
                          a better future for sport."}
                    </p>
                    <a href="#">{"Our Initiatives"}</a>
                </div>
            </section>

            <ChatWidget />
        </main>
    }
}
